//! Theme gallery and demo replay.

use dioxus::prelude::*;
use tokio::time::{sleep, Duration};

use invites_core::{Tone, ViewerSession, THEME_DEMO_ADVANCE_DELAY_MS};
use invites_ui::{background_style, theme_by_id, theme_catalog, ThemeData};

use crate::state::{EditorScreen, EditorState};

/// Gallery grid with a tone filter.
#[component]
pub fn ThemeGalleryScreen(mut state: Signal<EditorState>) -> Element {
    let filter = state.read().tone_filter;

    let themes: Vec<&'static ThemeData> = theme_catalog()
        .iter()
        .filter(|t| filter.is_none_or(|tone| t.tone == tone))
        .collect();

    rsx! {
        div {
            class: "themes-page",

            div {
                class: "themes-header",
                button {
                    class: "back-link",
                    onclick: move |_| {
                        state.write().screen = EditorScreen::Wizard;
                    },
                    "← Back to Create"
                }
                h1 { class: "themes-title", "Theme Examples" }
                p { class: "themes-subtitle", "Explore different themes to inspire your invitation" }
            }

            div {
                class: "theme-filters",
                button {
                    class: if filter.is_none() { "filter-button active" } else { "filter-button" },
                    onclick: move |_| {
                        state.write().tone_filter = None;
                    },
                    "All Themes"
                }
                for tone in Tone::all().iter().copied() {
                    button {
                        class: if filter == Some(tone) { "filter-button active" } else { "filter-button" },
                        onclick: move |_| {
                            state.write().tone_filter = Some(tone);
                        },
                        "{tone.display_name()}"
                    }
                }
            }

            div {
                class: "theme-grid",
                for theme in themes {
                    ThemeCard { state, theme_id: theme.id }
                }
            }
        }
    }
}

#[component]
fn ThemeCard(mut state: Signal<EditorState>, theme_id: &'static str) -> Element {
    let Some(theme) = theme_by_id(theme_id) else {
        return rsx! {};
    };
    let preview_style = background_style(theme.background_theme, theme.color_theme);

    rsx! {
        div {
            class: "theme-card",
            onclick: move |_| {
                state.write().start_theme_demo(theme_id);
            },

            div {
                class: "theme-card-preview",
                style: "{preview_style}",
                span { class: "view-button", "View Example →" }
            }
            div {
                class: "theme-card-content",
                h3 { class: "theme-card-title", "{theme.name}" }
                p { class: "theme-card-tone", "{theme.tone.display_name()}" }
                p { class: "theme-card-description", "{theme.description}" }
                p { class: "theme-card-preview-text", "{theme.preview}" }
            }
        }
    }
}

/// Demo replay of one catalog theme's sample invitation.
///
/// Screens accumulate down the page as the sequencer advances; "Show All"
/// bypasses the timer entirely.
#[component]
pub fn ThemeDemoScreen(mut state: Signal<EditorState>, theme_id: String) -> Element {
    let mut pending_timer: Signal<Option<Task>> = use_signal(|| None);

    use_effect(move || {
        let stage = state.read().demo_session.stage();
        let show_all = state.read().demo_show_all;

        if let Some(task) = pending_timer.write().take() {
            task.cancel();
        }

        if !show_all && stage.auto_advances() {
            let task = spawn(async move {
                sleep(Duration::from_millis(THEME_DEMO_ADVANCE_DELAY_MS)).await;
                state.write().demo_session.advance();
            });
            pending_timer.set(Some(task));
        }
    });

    use_drop(move || {
        if let Some(task) = pending_timer.write().take() {
            task.cancel();
        }
    });

    let Some(theme) = theme_by_id(&theme_id) else {
        return rsx! {
            div {
                class: "themes-page",
                h1 { "Theme not found" }
                button {
                    class: "back-link",
                    onclick: move |_| {
                        state.write().screen = EditorScreen::ThemeGallery;
                    },
                    "← Back to Themes"
                }
            }
        };
    };

    let show_all = state.read().demo_show_all;
    let visible = if show_all {
        6
    } else {
        state.read().demo_session.stage().screen_number().unwrap_or(6)
    };
    let style = background_style(theme.background_theme, theme.color_theme);
    let sample = theme.sample;

    rsx! {
        div {
            class: "theme-demo",
            style: "{style}",

            div {
                class: "theme-demo-controls",
                button {
                    class: "back-link",
                    onclick: move |_| {
                        state.write().screen = EditorScreen::ThemeGallery;
                    },
                    "← Back to Themes"
                }
                div {
                    class: "control-buttons",
                    button {
                        class: "control-button",
                        onclick: move |_| {
                            let mut s = state.write();
                            s.demo_session = ViewerSession::new();
                            s.demo_show_all = false;
                        },
                        "Reset"
                    }
                    button {
                        class: "control-button",
                        onclick: move |_| {
                            let show_all = state.read().demo_show_all;
                            state.write().demo_show_all = !show_all;
                        },
                        if show_all { "Animate" } else { "Show All" }
                    }
                }
                button {
                    class: "use-theme-btn",
                    onclick: move |_| {
                        let mut s = state.write();
                        s.draft = theme.seed_draft();
                        s.wizard_step = 1;
                        s.screen = EditorScreen::Wizard;
                    },
                    "Use This Theme →"
                }
            }

            div {
                class: "theme-info",
                h2 { class: "theme-name", "{theme.name}" }
                p { class: "theme-description", "{theme.description}" }
            }

            div {
                class: "demo-screens",

                if visible >= 1 {
                    div { class: "demo-screen fade-in",
                        p { class: "demo-text", "{sample.opening_line}" }
                    }
                }
                if visible >= 2 {
                    div { class: "demo-screen fade-in",
                        p { class: "demo-text", "From: {sample.sender_name}" }
                    }
                }
                if visible >= 3 {
                    div { class: "demo-screen fade-in",
                        p { class: "demo-text", "{sample.traits}" }
                    }
                }
                if visible >= 4 {
                    div { class: "demo-screen fade-in",
                        p { class: "demo-text", "{sample.vulnerability_line}" }
                    }
                }
                if visible >= 5 {
                    div { class: "demo-screen fade-in",
                        p { class: "demo-invitation", "{sample.invitation_sentence}" }
                    }
                }
                if visible >= 6 {
                    div { class: "demo-screen fade-in",
                        div {
                            class: "demo-details",
                            p { "📅 {sample.date}" }
                            p { "🕐 {sample.time}" }
                            p { "📍 {sample.location}" }
                        }
                        div {
                            class: "options-container",
                            button { class: "option-btn yes-btn", "💖 Yes, I'd love to" }
                            button { class: "option-btn maybe-btn", "😊 Maybe, tell me more" }
                            button { class: "option-btn no-btn", "🤍 I'm flattered, but no" }
                        }
                    }
                }
            }
        }
    }
}
