//! UI screens.

mod app;
mod notification_popup;
mod todo_screen;

pub use app::App;
pub use notification_popup::NotificationPopup;
pub use todo_screen::{TodoScreen, TodoScreenState};
