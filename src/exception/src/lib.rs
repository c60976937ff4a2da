//! Exceptions, as seen by whoever has to report them.
//!
//! The rest of the runtime owns exception objects. Here we only describe the
//! read-only view the error reporter needs: a class, a message, a backtrace
//! and a cause. Records live in an [`Exceptions`] arena so that causes can
//! point anywhere, including back at themselves.

mod accessor;
mod category;
mod class;
mod error;
mod exceptions;
mod record;
mod value;

pub use self::{
    accessor::Accessor,
    category::Category,
    class::Class,
    error::{Error, Result},
    exceptions::{ExceptionId, Exceptions},
    record::Exception,
    value::Value,
};
