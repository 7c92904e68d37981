//! Root viewer component: tap-advanced replay with the response branch.

use dioxus::prelude::*;

use invites_core::{ResponseKind, Stage};
use invites_ui::{background_style, DateDetails, ScreenSurface, StoryScreen, TapHint};

use crate::state::ViewerAppState;

use super::music::MusicToggle;
use super::response::{ConfirmedScreen, DeclinedScreen, FlexibleScreen, FollowUpScreen};

/// Root viewer component.
#[component]
pub fn App(state: Signal<ViewerAppState>) -> Element {
    let loading = state.read().loading;
    let record = state.read().record.clone();
    let stage = state.read().session.stage();

    let style = background_style(record.background_theme, &record.color_theme);

    if loading {
        return rsx! {
            div {
                class: "screen-container",
                style: "{style}",
                div {
                    class: "screen-content",
                    p { class: "subtle-text", "Loading your invitation..." }
                }
            }
        };
    }

    rsx! {
        div {
            class: "viewer-app",

            if stage.auto_advances() {
                StoryScreenView { state, stage }
            } else {
                match stage {
                    Stage::Options => rsx! { OptionsScreen { state } },
                    Stage::FollowUpShown => rsx! { FollowUpScreen { state } },
                    Stage::Confirmed => rsx! { ConfirmedScreen { state } },
                    Stage::Flexible => rsx! { FlexibleScreen { state } },
                    Stage::Declined => rsx! { DeclinedScreen { state } },
                    _ => rsx! {},
                }
            }

            // The music side-channel lives outside the screen subtree so it
            // survives screen transitions.
            MusicToggle { state }
        }
    }
}

/// One of the five tap-to-advance story screens.
#[component]
fn StoryScreenView(mut state: Signal<ViewerAppState>, stage: Stage) -> Element {
    let record = state.read().record.clone();
    let style = background_style(record.background_theme, &record.color_theme);

    rsx! {
        ScreenSurface {
            style,
            on_tap: move |_| {
                state.write().session.advance();
            },
            StoryScreen { record, stage }
            TapHint { label: "Tap to continue" }
        }
    }
}

/// The final pre-branch screen: date details plus response controls.
#[component]
fn OptionsScreen(mut state: Signal<ViewerAppState>) -> Element {
    let record = state.read().record.clone();
    let style = background_style(record.background_theme, &record.color_theme);
    let kinds = record.response_options.enabled_kinds();

    rsx! {
        ScreenSurface {
            style,
            on_tap: move |_| {},

            DateDetails { record: record.clone() }

            div {
                class: "options-container",
                for kind in kinds {
                    button {
                        class: match kind {
                            ResponseKind::Yes => "option-btn yes-btn",
                            ResponseKind::Maybe => "option-btn maybe-btn",
                            ResponseKind::No => "option-btn no-btn",
                        },
                        onclick: move |evt| {
                            evt.stop_propagation();
                            state.write().session.choose(kind);
                        },
                        "{record.response_options.get(kind).label}"
                    }
                }
            }
        }
    }
}
