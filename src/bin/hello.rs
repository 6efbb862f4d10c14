#![warn(clippy::all, rust_2018_idioms)]
#![deny(missing_docs, unused, nonstandard_style, future_incompatible)]

//! # Hello
//!
//! Prints the addresses of `HI` and `printhi`, then greets five times.
//! Diagnostics go to stderr and are controlled by `RUST_LOG`.

use std::io;

use anyhow::Context;
use env_logger::Env;
use hello::Greeter;
use log::debug;

/// Run the greeter on stdout.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let stdout = io::stdout();
    let mut greeter = Greeter::new(stdout.lock());
    debug!("starting {:?}", greeter);

    greeter
        .run()
        .context("failed to write greeting to stdout")?;

    Ok(())
}
