//! A single exception record.

use crate::{Accessor, Category, Class, Result, Value};

/// An exception, as the error reporter sees it.
///
/// The builder-style methods consume `self` and return it, in the same way
/// diagnostics are put together elsewhere, since most of this is known when
/// the exception is first made.
#[derive(Debug, Clone)]
pub struct Exception {
    class: Class,
    category: Category,
    message: Accessor<Option<String>>,
    backtrace: Accessor<Option<Vec<Value>>>,
    cause: Value,
}

/// The runtime's generic error, with nothing else known about it.
impl Default for Exception {
    fn default() -> Self {
        Exception {
            class: Class::default(),
            category: Category::Generic,
            message: Accessor::default(),
            backtrace: Accessor::default(),
            cause: Value::default(),
        }
    }
}

impl Exception {
    /// A new exception with the given class, no message, no backtrace and no
    /// cause.
    ///
    /// This is never [`Category::Generic`], even for the generic class.
    /// Use [`Exception::default`] or set the category for that.
    pub fn new(class: Class) -> Exception {
        Exception {
            class,
            category: Category::Other,
            ..Exception::default()
        }
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Accessor::Returns(Some(message.into()));
        self
    }

    /// Replace the message reader, e.g. with one that raises.
    pub fn message_accessor(
        mut self,
        message: Accessor<Option<String>>,
    ) -> Self {
        self.message = message;
        self
    }

    /// Set the backtrace from frame descriptions.
    pub fn backtrace<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Value>,
    {
        let frames = frames.into_iter().map(Into::into).collect();
        self.backtrace = Accessor::Returns(Some(frames));
        self
    }

    /// Replace the backtrace reader.
    pub fn backtrace_accessor(
        mut self,
        backtrace: Accessor<Option<Vec<Value>>>,
    ) -> Self {
        self.backtrace = backtrace;
        self
    }

    pub fn cause(mut self, cause: impl Into<Value>) -> Self {
        self.cause = cause.into();
        self
    }
}

impl Exception {
    pub fn get_class(&self) -> &Class {
        &self.class
    }

    pub fn get_category(&self) -> Category {
        self.category
    }

    /// Read the message, which may fail if the reader was overridden.
    pub fn get_message(&self) -> Result<Option<&str>> {
        self.message.read("message").map(Option::as_deref)
    }

    /// Read the backtrace, which may fail if the reader was overridden.
    pub fn get_backtrace(&self) -> Result<Option<&[Value]>> {
        self.backtrace.read("backtrace").map(Option::as_deref)
    }

    /// The `cause` attribute. Reading it never fails.
    pub fn get_cause(&self) -> &Value {
        &self.cause
    }

    pub fn set_cause(&mut self, cause: Value) {
        self.cause = cause;
    }

    pub fn set_backtrace(&mut self, frames: Option<Vec<Value>>) {
        self.backtrace = Accessor::Returns(frames);
    }
}
