//! Errors for calling methods that don't exist or can't be called.

use std::{fmt, io};

use exception::{Class, Exception, ExceptionId};

use crate::ExecutionContext;

/// The visibility of the method that was looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The method was explicitly undefined.
    Undefined,
    Public,
    Private,
    Protected,
}

impl Visibility {
    fn word(self) -> &'static str {
        match self {
            Visibility::Undefined | Visibility::Public => "",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
        }
    }
}

/// Where a method was looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner<'a> {
    Class(&'a str),
    Module(&'a str),
}

impl fmt::Display for Owner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Owner::Class(name) => write!(f, "class '{name}'"),
            Owner::Module(name) => write!(f, "module '{name}'"),
        }
    }
}

impl Visibility {
    /// The message for looking up `name` on `owner` and not finding it.
    pub fn undefined_message(self, owner: Owner, name: &str) -> String {
        match self.word() {
            "" => format!("undefined method '{name}' for {owner}"),
            word => format!("undefined {word} method '{name}' for {owner}"),
        }
    }

    /// The message for finding `name` on `owner`, but not being allowed to
    /// call it.
    pub fn inaccessible_message(self, owner: Owner, name: &str) -> String {
        format!("method '{name}' for {owner} is {}", self.word())
    }
}

impl<W: io::Write> ExecutionContext<W> {
    /// The name error raised when a method can't be found.
    const NAME_ERROR: &'static str = "NameError";

    /// Raise a name error for an undefined method.
    pub fn undefined_method(
        &mut self,
        owner: Owner,
        name: &str,
        visibility: Visibility,
    ) -> ExceptionId {
        let message = visibility.undefined_message(owner, name);
        self.raise_name_error(message)
    }

    /// Raise a name error for a method which can't be called from here.
    pub fn inaccessible_method(
        &mut self,
        owner: Owner,
        name: &str,
        visibility: Visibility,
    ) -> ExceptionId {
        let message = visibility.inaccessible_message(owner, name);
        self.raise_name_error(message)
    }

    fn raise_name_error(&mut self, message: String) -> ExceptionId {
        let mut exception =
            Exception::new(Class::new(Self::NAME_ERROR)).message(message);

        if let Some(position) = &self.position {
            exception = exception.backtrace([position.frame()]);
        }

        self.raise(exception)
    }
}
