//! Timed preview of the drafted invitation.
//!
//! Replays the same sequencer the recipient viewer drives, advancing on a
//! fixed timer as well as on tap. One cancellable task handle backs the
//! pending timer; it is cancelled on every stage change and on teardown so
//! a stale tick can never advance a future state.

use dioxus::prelude::*;
use tokio::time::{sleep, Duration};

use invites_core::{AnimationSpeed, ResponseKind, Stage, PREVIEW_ADVANCE_DELAY_MS};
use invites_storage::{publish, RedbContentStore};
use invites_ui::{background_style, DateDetails, ScreenSurface, StoryScreen, TapHint};

use crate::state::{EditorScreen, EditorState};

use super::app::{base_url, default_data_dir};

/// Delay before the replay/share controls appear on the options screen.
const CONTROLS_DELAY_MS: u64 = 1000;

#[component]
pub fn PreviewScreen(mut state: Signal<EditorState>) -> Element {
    let mut pending_timer: Signal<Option<Task>> = use_signal(|| None);

    // One owned timer: cancelled whenever the stage changes, rescheduled for
    // stages that advance on their own.
    use_effect(move || {
        let stage = state.read().session.stage();
        let controls_shown = state.read().controls_shown;

        if let Some(task) = pending_timer.write().take() {
            task.cancel();
        }

        if stage.auto_advances() {
            let task = spawn(async move {
                sleep(Duration::from_millis(PREVIEW_ADVANCE_DELAY_MS)).await;
                state.write().session.advance();
            });
            pending_timer.set(Some(task));
        } else if stage == Stage::Options && !controls_shown {
            let task = spawn(async move {
                sleep(Duration::from_millis(CONTROLS_DELAY_MS)).await;
                state.write().controls_shown = true;
            });
            pending_timer.set(Some(task));
        }
    });

    use_drop(move || {
        if let Some(task) = pending_timer.write().take() {
            task.cancel();
        }
    });

    let stage = state.read().session.stage();
    let draft = state.read().draft.clone();
    let controls_shown = state.read().controls_shown;

    // The preview renders from the draft as the recipient would see it.
    let record = match draft.finalize() {
        Ok(record) => record,
        Err(e) => {
            // Fields were edited out from under the preview; send the author
            // back to the form rather than showing a broken replay.
            tracing::warn!("Draft no longer previewable: {}", e);
            spawn(async move {
                state.write().screen = EditorScreen::Wizard;
            });
            return rsx! {};
        }
    };

    let style = background_style(record.background_theme, &record.color_theme);
    let speed_class = match draft.animation_speed {
        AnimationSpeed::Slow => "anim-slow",
        AnimationSpeed::Medium => "anim-medium",
        AnimationSpeed::Fast => "anim-fast",
    };

    rsx! {
        div {
            class: "preview-page {speed_class}",

            div {
                class: "preview-header",
                button {
                    class: "edit-btn",
                    onclick: move |_| {
                        state.write().screen = EditorScreen::Wizard;
                    },
                    "✏️ Edit"
                }
            }

            if stage.auto_advances() {
                ScreenSurface {
                    style,
                    on_tap: move |_| {
                        state.write().session.advance();
                    },
                    StoryScreen { record: record.clone(), stage }
                    TapHint { label: "Tap to continue (or wait 3s)" }
                }
            } else {
                ScreenSurface {
                    style,
                    on_tap: move |_| {},

                    match stage {
                        Stage::Options => rsx! {
                            h1 { class: "invitation-question", "{record.invitation_sentence}" }
                            DateDetails { record: record.clone() }
                            div {
                                class: "options-container",
                                button {
                                    class: "option-btn yes-btn",
                                    onclick: move |evt| {
                                        evt.stop_propagation();
                                        state.write().session.choose(ResponseKind::Yes);
                                    },
                                    "{record.response_options.yes.label}"
                                }
                                button {
                                    class: "option-btn no-btn",
                                    onclick: move |evt| {
                                        evt.stop_propagation();
                                        state.write().session.choose(ResponseKind::No);
                                    },
                                    "{record.response_options.no.label}"
                                }
                            }
                        },
                        Stage::FollowUpShown | Stage::Confirmed => rsx! {
                            div {
                                class: "follow-up-message",
                                p { class: "follow-up-text", "{record.response_options.yes.follow_up}" }
                            }
                        },
                        Stage::Declined => rsx! {
                            div {
                                class: "follow-up-message",
                                p { class: "follow-up-text", "{record.response_options.no.follow_up}" }
                            }
                        },
                        _ => rsx! {},
                    }

                    if controls_shown {
                        PreviewControls { state }
                    }
                }
            }
        }
    }
}

/// Replay and share controls shown once the replay reaches the end.
#[component]
fn PreviewControls(mut state: Signal<EditorState>) -> Element {
    rsx! {
        div {
            class: "controls-container",

            div {
                class: "preview-badge",
                "✨ This is how your invitation will appear"
            }

            div {
                class: "button-group",
                button {
                    class: "btn-secondary",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        state.write().replay_preview();
                    },
                    "🔄 Replay"
                }
                button {
                    class: "btn-primary",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        spawn(async move {
                            generate_link(&mut state).await;
                        });
                    },
                    "Generate Link 🔗"
                }
            }

            p {
                class: "help-text",
                "Your special someone will see each screen appear one at a time"
            }
        }
    }
}

/// Publishes the finalized draft to the local store and opens the modal.
async fn generate_link(state: &mut Signal<EditorState>) {
    let finalized = state.read().draft.finalize();
    let record = match finalized {
        Ok(record) => record,
        Err(e) => {
            let mut s = state.write();
            s.publish_error = Some(e.to_string());
            s.link_modal_open = true;
            return;
        }
    };

    let db_path = RedbContentStore::default_path(default_data_dir());
    let result = match RedbContentStore::open(&db_path) {
        Ok(store) => publish(&store, &record, &base_url()).await,
        Err(e) => Err(e),
    };

    let mut s = state.write();
    match result {
        Ok(published) => {
            tracing::info!(key = %published.key, "Generated invite link");
            s.generated = Some(published);
            s.publish_error = None;
            s.link_copied = false;
            s.link_modal_open = true;
        }
        Err(e) => {
            tracing::error!("Failed to publish invitation: {}", e);
            s.publish_error = Some(e.to_string());
            s.link_modal_open = true;
        }
    }
}
