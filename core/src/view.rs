//! Headless renderer: the todo list and the user selection as plain data.
//!
//! # Design
//! Todos are always inserted at the top of the list, whether they come from
//! the startup load or from a fresh creation. Loading in fetch order therefore
//! shows the last fetched todo first. User options are appended and keep
//! fetch order.

use std::collections::VecDeque;
use std::fmt;

use crate::types::{Id, Todo, User};

/// One rendered todo: its tag, label parts, and checkbox state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Id,
    pub title: String,
    pub user_name: String,
    pub checked: bool,
}

impl TodoItem {
    /// Label text, e.g. `"A by Bob"`.
    pub fn label(&self) -> String {
        format!("{} by {}", self.title, self.user_name)
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { 'x' } else { ' ' };
        write!(f, "[{mark}] #{} {}", self.id, self.label())
    }
}

/// An entry of the user selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOption {
    pub value: Id,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct View {
    items: VecDeque<TodoItem>,
    user_options: Vec<UserOption>,
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_todo(&mut self, todo: &Todo, user_name: &str) {
        self.items.push_front(TodoItem {
            id: todo.id.clone(),
            title: todo.title.clone(),
            user_name: user_name.to_string(),
            checked: todo.completed,
        });
    }

    pub fn render_user_option(&mut self, user: &User) {
        self.user_options.push(UserOption {
            value: user.id.clone(),
            label: user.name.clone(),
        });
    }

    /// Drops every item tagged with `id`. Returns false if none was rendered.
    pub fn remove_todo(&mut self, id: &Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Sets the checkbox of the top-most item tagged with `id`.
    ///
    /// Items sharing an id cannot be told apart here, so a lower duplicate is
    /// never reached.
    pub fn set_checked(&mut self, id: &Id, checked: bool) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn item(&self, id: &Id) -> Option<&TodoItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Items from the top of the list down.
    pub fn items(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.iter()
    }

    pub fn user_options(&self) -> &[UserOption] {
        &self.user_options
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.user_options.clear();
    }
}
