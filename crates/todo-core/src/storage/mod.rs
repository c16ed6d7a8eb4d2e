mod collection;
mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::sync::Arc;

use crate::todo::{Todo, TodoId};

/// Trait for todo storage backends.
///
/// Implementations own the collection of todos and assign identifiers.
/// Every method takes `&self`; backends guard their state with a single
/// lock so operations on one instance never interleave.
pub trait Storage: Send + Sync {
    /// Stores a todo, assigning it the next identifier.
    ///
    /// Returns the stored record with its id populated.
    fn create(&self, todo: Todo) -> Result<Todo, StorageError>;

    /// Returns a copy of all todos in insertion order.
    fn list(&self) -> Result<Vec<Todo>, StorageError>;

    /// Removes the todo with the given id.
    ///
    /// Returns [`StorageError::NotFound`] if no todo has that id.
    fn delete(&self, id: TodoId) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn create(&self, todo: Todo) -> Result<Todo, StorageError> {
        (**self).create(todo)
    }

    fn list(&self) -> Result<Vec<Todo>, StorageError> {
        (**self).list()
    }

    fn delete(&self, id: TodoId) -> Result<(), StorageError> {
        (**self).delete(id)
    }
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn create(&self, todo: Todo) -> Result<Todo, StorageError> {
        (**self).create(todo)
    }

    fn list(&self) -> Result<Vec<Todo>, StorageError> {
        (**self).list()
    }

    fn delete(&self, id: TodoId) -> Result<(), StorageError> {
        (**self).delete(id)
    }
}
