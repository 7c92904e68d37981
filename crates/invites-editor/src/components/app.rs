//! Root application component with screen routing.

use std::path::PathBuf;

use dioxus::prelude::*;

use crate::state::{EditorScreen, EditorState};

use super::home::HomeScreen;
use super::link_modal::LinkModal;
use super::preview::PreviewScreen;
use super::themes::{ThemeDemoScreen, ThemeGalleryScreen};
use super::wizard::WizardScreen;

/// Get the default data directory for Love Invites.
///
/// Respects `LOVEINVITES_DATA_DIR` for multi-instance use.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LOVEINVITES_DATA_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/love-invites");
        }
    }
    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("love-invites");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local/share/love-invites");
        }
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("love-invites");
        }
    }
    PathBuf::from(".").join("love-invites")
}

/// Base URL embedded in generated viewer links.
pub fn base_url() -> String {
    std::env::var("LOVEINVITES_BASE_URL")
        .unwrap_or_else(|_| "https://loveinvites.app".to_string())
}

/// Root application component.
#[component]
pub fn App() -> Element {
    let state = use_signal(EditorState::new);

    let current_screen = state.read().screen.clone();
    let link_modal_open = state.read().link_modal_open;

    rsx! {
        div {
            class: "editor-app",

            match current_screen {
                EditorScreen::Home => rsx! {
                    HomeScreen { state }
                },
                EditorScreen::Wizard => rsx! {
                    WizardScreen { state }
                },
                EditorScreen::Preview => rsx! {
                    PreviewScreen { state }
                },
                EditorScreen::ThemeGallery => rsx! {
                    ThemeGalleryScreen { state }
                },
                EditorScreen::ThemeDemo(theme_id) => rsx! {
                    ThemeDemoScreen { state, theme_id }
                },
            }

            if link_modal_open {
                LinkModal { state }
            }
        }
    }
}
