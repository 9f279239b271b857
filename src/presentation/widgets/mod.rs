mod credits_dialog;
mod footer_bar;
mod header_bar;
mod input;
mod task_list;

pub use credits_dialog::{CreditsDialog, DialogLayout};
pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle, HeaderControls};
pub use input::{AddButton, TextInput};
pub use task_list::{TaskListState, TaskListWidget};
