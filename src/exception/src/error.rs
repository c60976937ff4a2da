//! Errors from reading exception attributes.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A user-defined reader raised instead of returning a value.
    #[error("`{attribute}` raised {class}")]
    Raised {
        attribute: &'static str,
        class: String,
    },

    /// The record doesn't exist in the arena.
    #[error("no exception with id {0}")]
    Missing(usize),
}
