//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Repository interface for the todo operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task with the given title
    ///
    /// Fails with [`crate::Error::InvalidTitle`] when `title` is empty.
    /// The title is stored as given, without trimming.
    async fn create(&self, title: String) -> Result<Task>;

    /// Get all tasks, in no particular order
    async fn list(&self) -> Result<Vec<Task>>;

    /// Mark a task completed and return it
    ///
    /// Completing an already completed task is a no-op.
    async fn complete(&self, id: &str) -> Result<Task>;

    /// Delete a task by ID
    async fn delete(&self, id: &str) -> Result<()>;

    /// Number of stored tasks
    async fn len(&self) -> usize;

    /// Whether the store holds no tasks
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
