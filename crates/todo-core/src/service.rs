use crate::storage::{Storage, StorageError};
use crate::todo::{Todo, TodoId};

/// Task-level operations over a storage backend.
///
/// Holds no state of its own; every call goes straight to the injected
/// storage, which owns the todos and enforces all rules.
pub struct TodoService<S: Storage> {
    storage: S,
}

impl<S: Storage> TodoService<S> {
    /// Creates a new TodoService with the given storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Adds a todo with the given title and returns the stored record.
    pub fn add_todo(&self, title: &str) -> Result<Todo, StorageError> {
        self.storage.create(Todo::new(title))
    }

    /// Lists all todos in insertion order.
    pub fn list_todos(&self) -> Result<Vec<Todo>, StorageError> {
        self.storage.list()
    }

    /// Deletes a todo by ID.
    pub fn delete_todo(&self, id: TodoId) -> Result<(), StorageError> {
        self.storage.delete(id)
    }

    /// Returns the underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
