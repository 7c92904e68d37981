//! Entry point for the Love Invites viewer.
//!
//! Loads one invitation record by key and hands it to the replay UI. A
//! store miss falls back to the built-in sample record rather than showing
//! an error.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use invites_core::InvitationRecord;
use invites_share::parse_invite_key;
use invites_storage::{load_or_sample, RedbContentStore};
use invites_viewer::components::App;
use invites_viewer::state::ViewerAppState;

const SHARED_CSS: &str = invites_ui::SHARED_CSS;
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Global storage for the invite argument.
static INVITE_ARG: OnceLock<Option<String>> = OnceLock::new();

/// Global storage for the data directory override.
static DATA_DIR_ARG: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "invites-viewer")]
#[command(about = "Recipient viewer for Love Invites")]
struct Args {
    /// Invite key or full invite URL (opens the built-in sample if omitted
    /// or unknown)
    invite: Option<String>,

    /// Data directory holding the invite store
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

/// Get the default data directory for Love Invites.
///
/// Respects `LOVEINVITES_DATA_DIR` for multi-instance use.
fn default_data_dir() -> PathBuf {
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

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args = Args::parse();
    tracing::info!(invite = ?args.invite, "Starting Love Invites viewer");

    INVITE_ARG.set(args.invite).ok();
    DATA_DIR_ARG.set(args.data_dir).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("You have an invitation 💌")
                        .with_inner_size(LogicalSize::new(480.0, 820.0)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@400;500;600;700&family=Quicksand:wght@400;500;600;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    SHARED_CSS, STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Root component that resolves the invite record before rendering.
#[component]
fn RootApp() -> Element {
    let mut state = use_signal(ViewerAppState::new);

    // On mount: look the record up by key. Any failure along the way leaves
    // the built-in sample in place.
    use_effect(move || {
        spawn(async move {
            let invite = INVITE_ARG.get().and_then(|v| v.clone());
            let data_dir = DATA_DIR_ARG
                .get()
                .and_then(|v| v.clone())
                .unwrap_or_else(default_data_dir);

            if let Some(record) = load_record(invite.as_deref(), &data_dir).await {
                state.write().record = record;
            }
            state.write().loading = false;
        });
    });

    rsx! {
        App { state }
    }
}

/// Reads exactly one record from the content store, or `None` to keep the
/// sample already in place.
async fn load_record(invite: Option<&str>, data_dir: &PathBuf) -> Option<InvitationRecord> {
    let key = invite.and_then(parse_invite_key)?;

    let db_path = RedbContentStore::default_path(data_dir);
    match RedbContentStore::open(&db_path) {
        Ok(store) => Some(load_or_sample(&store, &key).await),
        Err(e) => {
            tracing::warn!(key = %key, "Could not open invite store, using sample: {}", e);
            None
        }
    }
}
