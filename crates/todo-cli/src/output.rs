//! Plain-text rendering of command results.

use std::fmt::Write;

use todo_core::{Todo, TodoId};

/// Line printed after a successful add.
pub fn added(todo: &Todo) -> String {
    format!("Added Todo: ID={}, Title={}", todo.id, todo.title)
}

/// Line printed after a successful delete.
pub fn deleted(id: TodoId) -> String {
    format!("Deleted Todo with ID {id}")
}

/// Full listing, one todo per line, newline-terminated.
pub fn listing(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos found.\n".to_string();
    }

    let mut out = String::from("All Todos:\n");
    for todo in todos {
        let _ = writeln!(
            out,
            "ID={}, Title={}, Status={}",
            todo.id,
            todo.title,
            todo.status_label()
        );
    }
    out
}
