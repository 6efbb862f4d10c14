//! Greeting routine and the addresses it reports.

use std::io::{self, Write};

use log::{debug, trace};

/// The greeting.
///
/// A `static` rather than a `const`, so the string has exactly one
/// address for the whole lifetime of the process.
pub static HI: &str = "hi";

/// How often [`Greeter::greet`] calls [`printhi`].
pub const REPEAT: usize = 5;

/// Writes [`HI`] followed by a newline.
///
/// Never inlined and exported under its plain name, so a debugger can
/// break on `printhi` by symbol or at the address [`printhi_address`]
/// reports.
///
/// ```
/// # fn main() -> std::io::Result<()> {
/// # use hello::printhi;
/// let mut out = Vec::<u8>::new();
/// printhi(&mut out)?;
/// assert_eq!(out, b"hi\n");
/// # Ok(())
/// # }
/// ```
#[inline(never)]
#[no_mangle]
pub fn printhi(sink: &mut dyn Write) -> io::Result<()> {
    writeln!(sink, "{}", HI)
}

/// Address of the string data behind [`HI`].
pub fn hi_address() -> *const u8 {
    HI.as_ptr()
}

/// Address of the [`printhi`] function.
pub fn printhi_address() -> *const () {
    printhi as *const ()
}

/// Writes the address report and the greetings into a sink.
///
/// Can take any type with the `Write` trait as sink.
pub struct Greeter<W> {
    /// Destination of every line.
    sink: W,
}

impl<W> Greeter<W>
where
    W: Write
{
    /// Create a new Greeter.
    ///
    /// ```
    /// # use hello::Greeter;
    /// let stdout = std::io::stdout();
    /// let greeter = Greeter::new(stdout.lock());
    /// ```
    pub fn new(sink: W) -> Greeter<W> {
        Greeter { sink }
    }

    /// Writes one line with the address of [`HI`] and one with the
    /// address of [`printhi`].
    pub fn report_addresses(&mut self) -> io::Result<()> {
        let hi = hi_address();
        let func = printhi_address();
        debug!("HI at {:p}, printhi at {:p}", hi, func);

        writeln!(self.sink, "hi at: {:p}", hi)?;
        writeln!(self.sink, "printhi located at: {:p}", func)?;

        io::Result::Ok(())
    }

    /// Calls [`printhi`] on the sink [`REPEAT`] times.
    pub fn greet(&mut self) -> io::Result<()> {
        for round in 1..=REPEAT {
            trace!("greeting {}/{}", round, REPEAT);
            printhi(&mut self.sink)?;
        }

        io::Result::Ok(())
    }

    /// Reports both addresses, greets, then flushes the sink.
    ///
    /// ```
    /// # fn main() -> std::io::Result<()> {
    /// # use hello::Greeter;
    /// let mut greeter = Greeter::new(Vec::new());
    /// greeter.run()?;
    ///
    /// let output = String::from_utf8(greeter.into_inner()).unwrap();
    /// assert_eq!(output.lines().count(), 7);
    /// # Ok(())
    /// # }
    /// ```
    pub fn run(&mut self) -> io::Result<()> {
        self.report_addresses()?;
        self.greet()?;
        self.sink.flush()
    }
}

impl<W> Greeter<W> {
    /// Unwraps the Greeter, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W> std::fmt::Debug for Greeter<W>
where
    W: std::fmt::Debug
{
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("Greeter")
            .field("sink", &self.sink)
            .finish()
    }
}
