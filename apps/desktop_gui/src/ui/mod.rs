//! UI layer for the desktop app: app shell, screens, and theme.

pub mod app;
pub mod screens;
pub mod theme;

pub use app::{DesktopGuiApp, PersistedAppSettings, SETTINGS_STORAGE_KEY};
