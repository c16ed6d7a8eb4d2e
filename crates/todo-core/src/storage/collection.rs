use crate::todo::{Todo, TodoId};

use super::error::StorageError;

/// Ordered set of todos plus the id counter, shared by both backends.
///
/// `last_id` only ever grows, so ids freed by a delete are never handed out
/// again by the same instance.
#[derive(Debug, Default)]
pub(crate) struct TodoCollection {
    todos: Vec<Todo>,
    last_id: TodoId,
}

impl TodoCollection {
    /// Rebuilds a collection from loaded records.
    ///
    /// The counter resumes from the highest id present.
    pub(crate) fn from_todos(todos: Vec<Todo>) -> Self {
        let last_id = todos.iter().map(|t| t.id).max().unwrap_or(0).max(0);
        Self { todos, last_id }
    }

    /// Assigns the next id and appends the todo.
    ///
    /// Fails without touching the collection once the id space is used up.
    pub(crate) fn insert(&mut self, mut todo: Todo) -> Result<Todo, StorageError> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or(StorageError::IdExhausted)?;
        self.last_id = id;
        todo.id = id;
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Removes the first todo with a matching id.
    pub(crate) fn remove(&mut self, id: TodoId) -> Result<Todo, StorageError> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StorageError::NotFound(id))?;
        Ok(self.todos.remove(index))
    }

    pub(crate) fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub(crate) fn last_id(&self) -> TodoId {
        self.last_id
    }

    pub(crate) fn len(&self) -> usize {
        self.todos.len()
    }
}
