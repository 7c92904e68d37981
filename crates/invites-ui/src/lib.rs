//! Shared UI components for Love Invites applications.
//!
//! Provides the sequence-screen components shared between the editor
//! preview and the recipient viewer, the static theme catalog, display
//! formatting, and the shared stylesheet.

pub mod catalog;
pub mod format;
pub mod screens;
pub mod theme;

pub use catalog::{theme_by_id, theme_catalog, ThemeData, ThemeSample};
pub use format::{format_date, format_time};
pub use screens::{DateDetails, ScreenSurface, StoryScreen, TapHint};
pub use theme::background_style;

/// Shared CSS containing design tokens and base styles for both apps.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
