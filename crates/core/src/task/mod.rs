//! Task module
//!
//! This module contains task-related types and the in-memory store.

mod memory_store;
mod model;
mod repository;

pub use memory_store::MemoryTaskStore;
pub use model::*;
pub use repository::TaskRepository;
