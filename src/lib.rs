#![warn(clippy::all, rust_2018_idioms)]
#![deny(missing_docs, unused, nonstandard_style, future_incompatible)]

//! # Hello
//!
//! A small debuggee. It prints where its greeting and its print function
//! live in memory, then greets a few times, giving a ptrace debugger
//! addresses to break on.

mod greeting;

pub use crate::greeting::{hi_address, printhi, printhi_address, Greeter, HI, REPEAT};
