//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Create was called with an empty title.
    #[error("title cannot be empty")]
    InvalidTitle,

    /// No task is stored under the given id.
    #[error("todo not found")]
    NotFound(String),
}
