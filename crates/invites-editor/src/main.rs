//! Entry point for the Love Invites editor.

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use invites_editor::components::App;

const SHARED_CSS: &str = invites_ui::SHARED_CSS;
const STYLES_CSS: &str = include_str!("../assets/styles.css");

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting Love Invites editor");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Love Invites")
                        .with_inner_size(LogicalSize::new(1100.0, 800.0)),
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
        .launch(App);
}
