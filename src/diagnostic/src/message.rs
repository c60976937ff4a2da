//! The message argument of an entry.

use exception::Exception;
use log::debug;

/// An exception's message, as handed to the entry printer.
///
/// There's a difference between a message that was never computed and one
/// that was computed to be nothing: only in the second case is the entry
/// given a position label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    /// No message was computed at all.
    Unset,

    /// The message was read, and there isn't one.
    Nil,

    Text(&'a str),
}

impl<'a> Message<'a> {
    /// Read the message of `exception`.
    ///
    /// If the reader raises, that's treated as there being no message.
    pub fn read(exception: &'a Exception) -> Message<'a> {
        match exception.get_message() {
            Ok(Some(text)) => Message::Text(text),
            Ok(None) => Message::Nil,
            Err(e) => {
                let class = exception.get_class();
                debug!("reporting {class} without a message: {e}");
                Message::Nil
            }
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Message::Unset)
    }

    /// The message text, empty if there isn't any.
    pub fn text(&self) -> &'a str {
        match self {
            Message::Text(text) => text,
            Message::Unset | Message::Nil => "",
        }
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Message::Text(text)
    }
}
