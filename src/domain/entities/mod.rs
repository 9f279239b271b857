//! Domain entities.

mod task;
mod task_list;

pub use task::{Task, TaskId};
pub use task_list::TaskList;
