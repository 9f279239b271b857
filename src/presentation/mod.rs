//! Presentation layer with UI components and event handling.

/// Key to action resolution.
pub mod commands;
/// Event handling.
pub mod events;
/// Color palettes.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
