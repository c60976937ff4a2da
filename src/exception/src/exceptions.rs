//! The arena exception records live in.

use std::fmt;

use crate::{Error, Exception, Result, Value};

/// The identity of an exception record in an [`Exceptions`] arena.
///
/// Two ids are equal exactly when they refer to the same record, which is
/// what cause-chain de-duplication needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExceptionId(usize);

impl fmt::Display for ExceptionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// All the exception records known to the reporter.
#[derive(Debug, Default)]
pub struct Exceptions {
    records: Vec<Exception>,
}

impl Exceptions {
    pub fn new() -> Exceptions {
        Exceptions::default()
    }

    /// Add a record, returning its identity.
    pub fn insert(&mut self, exception: Exception) -> ExceptionId {
        let id = ExceptionId(self.records.len());
        self.records.push(exception);
        id
    }

    pub fn get(&self, id: ExceptionId) -> Option<&Exception> {
        self.records.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Point the cause of `id` at `cause`.
    ///
    /// Causes are set after the fact so that chains, including cyclic ones,
    /// can be made.
    pub fn set_cause(&mut self, id: ExceptionId, cause: Value) -> Result<()> {
        self.get_mut(id)?.set_cause(cause);
        Ok(())
    }

    /// Replace the backtrace of `id`.
    pub fn set_backtrace(
        &mut self,
        id: ExceptionId,
        frames: Option<Vec<Value>>,
    ) -> Result<()> {
        self.get_mut(id)?.set_backtrace(frames);
        Ok(())
    }

    fn get_mut(&mut self, id: ExceptionId) -> Result<&mut Exception> {
        self.records.get_mut(id.0).ok_or(Error::Missing(id.0))
    }
}
