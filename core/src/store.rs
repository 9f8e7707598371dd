//! In-memory State Store: the loaded todos and users.

use crate::types::{Id, Todo, User};

/// Owns the todo and user sequences. All mutation goes through
/// `replace_all`, `add` and `remove`.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    todos: Vec<Todo>,
    users: Vec<User>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the result of the startup fetch, dropping anything held before.
    pub fn replace_all(&mut self, todos: Vec<Todo>, users: Vec<User>) {
        self.todos = todos;
        self.users = users;
    }

    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Removes every todo carrying `id` and returns how many were dropped.
    pub fn remove(&mut self, id: &Id) -> usize {
        let before = self.todos.len();
        self.todos.retain(|todo| &todo.id != id);
        before - self.todos.len()
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn todo(&self, id: &Id) -> Option<&Todo> {
        self.todos.iter().find(|todo| &todo.id == id)
    }

    /// Display name of the user with `user_id`, or `""` when the user was not loaded.
    pub fn user_name(&self, user_id: &Id) -> &str {
        self.users
            .iter()
            .find(|user| &user.id == user_id)
            .map(|user| user.name.as_str())
            .unwrap_or("")
    }
}
