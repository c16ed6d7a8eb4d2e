use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::todo::{Todo, TodoId};

use super::collection::TodoCollection;
use super::error::StorageError;
use super::Storage;

/// In-memory storage. Contents live as long as the instance.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: Mutex<TodoCollection>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store. The first id handed out is 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, TodoCollection>, StorageError> {
        self.inner.lock().map_err(|_| StorageError::LockPoisoned)
    }
}

impl Storage for MemoryStorage {
    fn create(&self, todo: Todo) -> Result<Todo, StorageError> {
        let mut collection = self.lock()?;
        let stored = collection.insert(todo)?;
        debug!(id = stored.id, "created todo in memory");
        Ok(stored)
    }

    fn list(&self) -> Result<Vec<Todo>, StorageError> {
        let collection = self.lock()?;
        Ok(collection.todos().to_vec())
    }

    fn delete(&self, id: TodoId) -> Result<(), StorageError> {
        let mut collection = self.lock()?;
        collection.remove(id)?;
        debug!(id, "deleted todo from memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_ids_from_one() {
        let storage = MemoryStorage::new();

        let first = storage.create(Todo::new("buy milk")).unwrap();
        let second = storage.create(Todo::new("walk dog")).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.title, "buy milk");
        assert!(!first.done);
    }

    #[test]
    fn test_list_empty_returns_empty_vec() {
        let storage = MemoryStorage::new();
        assert!(storage.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_is_a_copy() {
        let storage = MemoryStorage::new();
        storage.create(Todo::new("a")).unwrap();

        let mut listed = storage.list().unwrap();
        listed[0].title = "changed".to_string();
        listed.clear();

        let again = storage.list().unwrap();
        assert_eq!(again.len(), 1);
        assert_eq!(again[0].title, "a");
    }

    #[test]
    fn test_delete_unknown_id() {
        let storage = MemoryStorage::new();
        storage.create(Todo::new("a")).unwrap();

        let err = storage.delete(99).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(99)));
        assert_eq!(err.to_string(), "todo not found");
        assert_eq!(storage.list().unwrap().len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let storage = MemoryStorage::new();
        storage.create(Todo::new("a")).unwrap();
        let b = storage.create(Todo::new("b")).unwrap();
        storage.delete(b.id).unwrap();

        let c = storage.create(Todo::new("c")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_concurrent_creates_get_unique_ids() {
        use std::collections::HashSet;
        use std::sync::Arc;
        use std::thread;

        let storage = Arc::new(MemoryStorage::new());
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let storage = Arc::clone(&storage);
                thread::spawn(move || {
                    (0..25)
                        .map(|i| storage.create(Todo::new(format!("{n}-{i}"))).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<TodoId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 200);
        assert_eq!(ids.iter().copied().max(), Some(200));
    }
}
