//! Application layer with services and the task list state machine.

/// Editable input line.
pub mod input;
/// Application services.
pub mod services;
/// Screen state container.
pub mod state;

pub use input::InputBuffer;
pub use services::{NotificationManager, PreferencesService};
pub use state::TodoState;
