//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of items that can be added,
//! toggled, removed, and cleared once completed. Insertion order is the
//! display order; removals never reorder the survivors.

use serde::{Deserialize, Serialize};

/// Message shown when the list has no items
pub const EMPTY_MESSAGE: &str = "No todos yet. Add one above!";

/// Unique identifier for a todo item
///
/// Ids are assigned from a per-list counter, so they increase with
/// insertion order and are never reused within one list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Trimmed, non-empty text
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed, todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// State of a todo list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    todos: Vec<TodoItem>,
    next_id: u64,
}

impl TodoState {
    /// Creates a new empty todo list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a todo with the trimmed `raw` text
    ///
    /// Blank text is silently ignored. Returns the id of the new item.
    pub fn add(&mut self, raw: &str) -> Option<TodoId> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let id = TodoId::new(self.next_id);
        self.next_id += 1;
        self.todos.push(TodoItem::new(id, text.to_string()));
        Some(id)
    }

    /// Flips `completed` on the item with `id`
    ///
    /// Returns `false` (and changes nothing) when no such item exists.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            },
            None => false,
        }
    }

    /// Removes the item with `id`, keeping the order of the rest
    ///
    /// Returns the removed item, if there was one.
    pub fn remove(&mut self, id: TodoId) -> Option<TodoItem> {
        let index = self.todos.iter().position(|t| t.id == id)?;
        Some(self.todos.remove(index))
    }

    /// Removes every completed item, keeping the order of the rest
    ///
    /// Returns how many items were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        before - self.todos.len()
    }

    /// Items in insertion order
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns `true` when the list has no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of todos not yet completed
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// Number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Whether the "clear completed" action has anything to do
    #[must_use]
    pub fn has_completed(&self) -> bool {
        self.todos.iter().any(|t| t.completed)
    }

    /// Placeholder text to show while the list is empty
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_MESSAGE)
    }
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions a presentation layer can send to a todo list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    /// Add a todo from raw input text
    Add {
        /// Untrimmed input
        text: String,
    },

    /// Flip the completion flag of a todo
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },

    /// Delete a todo
    Remove {
        /// Todo to delete
        id: TodoId,
    },

    /// Delete every completed todo
    ClearCompleted,
}
