//! Core library for the todo service
//!
//! This crate contains the task model and the in-memory store that
//! backs the HTTP API.

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
