//! Attribute readers that might fail.
//!
//! Messages and backtraces can be overridden by user code, and user code can
//! raise. The reporter has to cope with that, so the attribute is stored as
//! either the value the reader returns, or the class of what it raises.

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Accessor<T> {
    /// The reader returns this.
    Returns(T),

    /// The reader raises an exception of this class.
    Raises(String),
}

impl<T> Accessor<T> {
    /// Call the reader.
    ///
    /// The `attribute` name is only used to describe the failure.
    pub fn read(&self, attribute: &'static str) -> Result<&T> {
        match self {
            Accessor::Returns(value) => Ok(value),
            Accessor::Raises(class) => Err(Error::Raised {
                attribute,
                class: class.clone(),
            }),
        }
    }
}

impl<T: Default> Default for Accessor<T> {
    fn default() -> Self {
        Accessor::Returns(T::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn returns() {
        let a = Accessor::Returns(3);
        assert_eq!(a.read("x"), Ok(&3));
    }

    #[test]
    fn raises() {
        let a: Accessor<u8> = Accessor::Raises("NoMethodError".into());
        let e = a.read("message").unwrap_err();
        assert_eq!(e.to_string(), "`message` raised NoMethodError");
    }
}
