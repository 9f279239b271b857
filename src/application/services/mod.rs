//! Application services.

pub mod notification_manager;
pub mod preferences_service;

pub use notification_manager::NotificationManager;
pub use preferences_service::PreferencesService;
