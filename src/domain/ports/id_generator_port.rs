//! Task id generation port.

use crate::domain::entities::TaskId;

/// Source of ids for newly created tasks.
pub trait IdGenerator: Send {
    /// Returns the id for the next task.
    fn next_id(&mut self) -> TaskId;
}
