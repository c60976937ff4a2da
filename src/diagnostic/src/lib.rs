//! Diagnostics - the report printed when an exception goes uncaught.
//!
//! A report is made of an entry line for the exception (where it happened,
//! the message and the class), its backtrace, and then the same again for
//! each exception in its cause chain. Reports are either written straight to
//! the error stream, where anything that could mess with the terminal is
//! escaped, or appended to a string buffer untouched.

mod backtrace;
mod cause;
mod entry;
mod escape;
mod highlight;
mod message;
mod options;
mod position;
mod report;
mod target;

pub use self::{
    escape::escape,
    highlight::{BOLD, RESET, UNDERLINE},
    message::Message,
    options::{BacktraceLimit, Options, Order},
    position::Position,
    report::Reporter,
    target::Target,
};
