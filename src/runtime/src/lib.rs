//! The parts of the language runtime that deal with a program dying.
//!
//! When an exception or some other non-local jump escapes to the top level,
//! the runtime prints what happened to the error stream and picks an exit
//! status for the process. This crate has the [`ExecutionContext`] that holds
//! the exception being unwound, and the handling of each way execution can
//! end up there.

mod config;
mod context;
mod error;
mod exit;
mod tag;
mod visibility;

pub use crate::{
    config::{stderr_is_terminal, Config},
    context::{ExecutionContext, RaisedFlags},
    error::{Error, Result},
    exit::{EXIT_FAILURE, EXIT_SUCCESS},
    tag::Tag,
    visibility::{Owner, Visibility},
};

pub use termcolor::ColorChoice;
