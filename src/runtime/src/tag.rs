//! Tags are how far a non-local jump is unwinding, and why.

use crate::{Error, Result};

/// The reason execution is unwinding to the top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Nothing went wrong, execution finished normally.
    None = 0,
    Return = 1,
    Break = 2,
    Next = 3,
    Retry = 4,
    Redo = 5,
    /// An exception was raised.
    Raise = 6,
    Throw = 7,
    /// An error that can't be rescued.
    Fatal = 8,
}

impl Tag {
    /// The bits of a jump state which hold the tag. The rest are flags.
    pub const MASK: i32 = 0xf;

    /// The tag of a raw jump state.
    pub fn from_raw(state: i32) -> Result<Tag> {
        let tag = match state & Tag::MASK {
            0 => Tag::None,
            1 => Tag::Return,
            2 => Tag::Break,
            3 => Tag::Next,
            4 => Tag::Retry,
            5 => Tag::Redo,
            6 => Tag::Raise,
            7 => Tag::Throw,
            8 => Tag::Fatal,
            _ => return Err(Error::UnknownTag(state)),
        };

        Ok(tag)
    }

    /// What's printed when this control flow jump makes it all the way to the
    /// top level, where there's nothing to catch it.
    pub fn unexpected_message(self) -> Option<&'static str> {
        match self {
            Tag::Return => Some("unexpected return"),
            Tag::Next => Some("unexpected next"),
            Tag::Break => Some("unexpected break"),
            Tag::Redo => Some("unexpected redo"),
            Tag::Retry => Some("retry outside of rescue clause"),
            Tag::Throw => Some("unexpected throw"),
            Tag::None | Tag::Raise | Tag::Fatal => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn raw() {
        assert_eq!(Tag::from_raw(0), Ok(Tag::None));
        assert_eq!(Tag::from_raw(6), Ok(Tag::Raise));
        assert_eq!(Tag::from_raw(8), Ok(Tag::Fatal));
    }

    #[test]
    fn flags_are_ignored() {
        assert_eq!(Tag::from_raw(0x10 | 6), Ok(Tag::Raise));
    }

    #[test]
    fn unknown() {
        assert_eq!(Tag::from_raw(9), Err(Error::UnknownTag(9)));
        assert_eq!(Tag::from_raw(0x1f), Err(Error::UnknownTag(0x1f)));
    }

    #[test]
    fn as_raw() {
        for raw in 0..=8 {
            assert_eq!(Tag::from_raw(raw).map(|t| t as i32), Ok(raw));
        }
    }
}
