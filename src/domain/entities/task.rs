//! Task entity.

use serde::{Deserialize, Serialize};

/// Task identifier.
///
/// Drawn at random when the task is created. Uniqueness is not enforced.
pub type TaskId = i32;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Random identifier.
    pub id: TaskId,
    /// Text as entered by the user.
    pub text: String,
}

impl Task {
    /// Creates a task from an id and text.
    #[must_use]
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Returns whether `text` is acceptable for a new task.
    #[must_use]
    pub fn is_valid_text(text: &str) -> bool {
        !text.trim().is_empty()
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
