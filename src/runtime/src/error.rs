//! Runtime errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A jump state that isn't any of the known tags.
    #[error("Unknown longjmp status {0}")]
    UnknownTag(i32),
}
