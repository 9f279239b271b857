//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Transient toast notifications.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{Task, TaskId, TaskList};
pub use errors::StorageError;
pub use notification::Notification;
pub use ports::{IdGenerator, PreferenceStorePort};
