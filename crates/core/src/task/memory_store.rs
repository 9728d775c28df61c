//! In-memory task storage implementation
//!
//! Keeps every task in a map behind a single mutex. Each operation holds
//! the lock for its whole duration, so all store access is serialized.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::model::Task;
use super::repository::TaskRepository;
use crate::{Error, Result};

/// In-memory task store
#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: Mutex<HashMap<String, Task>>,
}

impl MemoryTaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskStore {
    async fn create(&self, title: String) -> Result<Task> {
        if title.is_empty() {
            return Err(Error::InvalidTitle);
        }

        let task = Task::new(title);
        let total = {
            let mut tasks = self.tasks.lock().await;
            tasks.insert(task.id.clone(), task.clone());
            tasks.len()
        };
        tracing::trace!(id = %task.id, total, "task stored");
        Ok(task)
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let tasks = self.tasks.lock().await;
        Ok(tasks.values().cloned().collect())
    }

    async fn complete(&self, id: &str) -> Result<Task> {
        let mut tasks = self.tasks.lock().await;
        let task = tasks
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        task.mark_completed();
        Ok(task.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut tasks = self.tasks.lock().await;
        match tasks.remove(id) {
            Some(_) => Ok(()),
            None => Err(Error::NotFound(id.to_string())),
        }
    }

    async fn len(&self) -> usize {
        self.tasks.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_task() {
        let store = MemoryTaskStore::new();

        let created = store.create("Write unit tests".to_string()).await.unwrap();

        assert_eq!(created.title, "Write unit tests");
        assert!(!created.completed);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_empty_title_fails() {
        let store = MemoryTaskStore::new();

        let result = store.create(String::new()).await;

        assert_eq!(result.unwrap_err(), Error::InvalidTitle);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_whitespace_title_is_accepted() {
        let store = MemoryTaskStore::new();

        let created = store.create("   ".to_string()).await.unwrap();
        assert_eq!(created.title, "   ");
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let store = MemoryTaskStore::new();
        assert!(store.list().await.unwrap().is_empty());

        store.create("Task 1".to_string()).await.unwrap();
        store.create("Task 2".to_string()).await.unwrap();
        let third = store.create("Task 3".to_string()).await.unwrap();

        let tasks = store.list().await.unwrap();
        assert_eq!(tasks.len(), 3);
        assert!(tasks.iter().any(|t| t.id == third.id));
    }

    #[tokio::test]
    async fn test_list_after_creates_and_deletes() {
        let store = MemoryTaskStore::new();

        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(store.create(format!("Task {}", i)).await.unwrap().id);
        }
        store.delete(&ids[0]).await.unwrap();
        store.delete(&ids[3]).await.unwrap();

        let tasks = store.list().await.unwrap();
        assert_eq!(tasks.len(), 3);
        assert!(!tasks.iter().any(|t| t.id == ids[0] || t.id == ids[3]));
    }

    #[tokio::test]
    async fn test_complete_is_idempotent() {
        let store = MemoryTaskStore::new();
        let task = store.create("Write unit tests".to_string()).await.unwrap();

        let completed = store.complete(&task.id).await.unwrap();
        assert!(completed.completed);
        assert_eq!(completed.id, task.id);
        assert_eq!(completed.title, task.title);

        let completed_again = store.complete(&task.id).await.unwrap();
        assert_eq!(completed_again, completed);

        let listed = store.list().await.unwrap();
        assert!(listed[0].completed);
    }

    #[tokio::test]
    async fn test_complete_nonexistent_task() {
        let store = MemoryTaskStore::new();

        match store.complete("nonexistent-id").await.unwrap_err() {
            Error::NotFound(id) => assert_eq!(id, "nonexistent-id"),
            e => panic!("Expected NotFound error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_delete_task() {
        let store = MemoryTaskStore::new();
        let task = store.create("Task to delete".to_string()).await.unwrap();

        store.delete(&task.id).await.unwrap();
        assert!(store.is_empty().await);

        // Both operations fail once the task is gone
        assert!(matches!(
            store.delete(&task.id).await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            store.complete(&task.id).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_returned_tasks_are_copies() {
        let store = MemoryTaskStore::new();
        let mut task = store.create("Original".to_string()).await.unwrap();

        task.title = "Changed".to_string();
        task.completed = true;

        let stored = store.list().await.unwrap();
        assert_eq!(stored[0].title, "Original");
        assert!(!stored[0].completed);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates() {
        let store = Arc::new(MemoryTaskStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(format!("Task {}", i)).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let task = handle.await.unwrap().unwrap();
            assert!(ids.insert(task.id));
        }

        assert_eq!(store.len().await, 64);
    }
}
