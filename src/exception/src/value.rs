//! Values an exception attribute can hold.
//!
//! Attributes in a dynamic runtime can hold anything. The reporter only cares
//! whether something is a string or an exception, everything else is carried
//! around so it can be skipped.

use crate::ExceptionId;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Nil,
    String(String),
    Integer(i64),
    Exception(ExceptionId),

    /// Some other object, known only by its class name.
    Object(String),
}

impl Value {
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Use this value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The exception this value refers to, if it refers to one.
    pub fn as_exception(&self) -> Option<ExceptionId> {
        match self {
            Value::Exception(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<ExceptionId> for Value {
    fn from(id: ExceptionId) -> Value {
        Value::Exception(id)
    }
}
