//! Response branch terminals.
//!
//! Replies and the chosen response live only in this viewing's UI state:
//! nothing is persisted back to the store.

use dioxus::prelude::*;

use invites_core::ResponseKind;
use invites_share::CalendarEvent;
use invites_ui::background_style;

use crate::state::ViewerAppState;

/// Yes, phase one: the follow-up is revealed and a second, distinct
/// confirmation is required before the celebration screen.
#[component]
pub fn FollowUpScreen(mut state: Signal<ViewerAppState>) -> Element {
    let record = state.read().record.clone();
    let style = background_style(record.background_theme, &record.color_theme);

    rsx! {
        div {
            class: "screen-container",
            style: "{style}",
            div {
                class: "screen-content fade-in",

                p { class: "follow-up-text", "{record.response_options.yes.follow_up}" }

                button {
                    class: "option-btn yes-btn confirm-btn",
                    onclick: move |_| {
                        state.write().session.confirm();
                    },
                    "💖 It's a date!"
                }
            }
        }
    }
}

/// Yes, confirmed: celebration, optional reply, calendar export.
#[component]
pub fn ConfirmedScreen(mut state: Signal<ViewerAppState>) -> Element {
    let record = state.read().record.clone();
    let style = background_style(record.background_theme, &record.color_theme);
    let event = CalendarEvent::from_record(&record);
    let google_url = event.google_calendar_url();
    let mut ics_saved: Signal<Option<String>> = use_signal(|| None);

    rsx! {
        div {
            class: "screen-container",
            style: "{style}",
            div {
                class: "screen-content fade-in confetti",

                h1 { class: "celebration-title", "🎉 Amazing! 🎉" }
                p { class: "celebration-text", "{record.response_options.yes.follow_up}" }

                div {
                    class: "calendar-actions",
                    a {
                        class: "calendar-btn",
                        href: "{google_url}",
                        target: "_blank",
                        "📅 Add to Google Calendar"
                    }
                    button {
                        class: "calendar-btn",
                        onclick: move |_| {
                            let ics = event.to_ics();
                            let path = std::env::temp_dir().join("date-invitation.ics");
                            match std::fs::write(&path, ics) {
                                Ok(()) => {
                                    tracing::info!(path = %path.display(), "Saved calendar file");
                                    ics_saved.set(Some(path.display().to_string()));
                                }
                                Err(e) => {
                                    tracing::warn!("Could not save calendar file: {}", e);
                                }
                            }
                        },
                        "⬇ Save calendar file"
                    }
                }
                if let Some(path) = ics_saved() {
                    p { class: "calendar-saved-note", "Saved to {path}" }
                }

                ReplyBox {
                    state,
                    kind: ResponseKind::Yes,
                    label: "Want to add a message?",
                    placeholder: "Type something sweet (optional)...",
                    button_label: "Send Reply 💌",
                }

                ReplayLink { state }
            }
        }
    }
}

/// Maybe: no-pressure terminal with an optional reply.
#[component]
pub fn FlexibleScreen(mut state: Signal<ViewerAppState>) -> Element {
    let record = state.read().record.clone();
    let style = background_style(record.background_theme, &record.color_theme);

    rsx! {
        div {
            class: "screen-container",
            style: "{style}",
            div {
                class: "screen-content fade-in",

                h1 { class: "follow-up-title", "No pressure! 💗" }
                p { class: "follow-up-text", "{record.response_options.maybe.follow_up}" }

                ReplyBox {
                    state,
                    kind: ResponseKind::Maybe,
                    label: "",
                    placeholder: "What would work better for you?",
                    button_label: "Send Message",
                }

                ReplayLink { state }
            }
        }
    }
}

/// No: respectful decline terminal. No reply field.
#[component]
pub fn DeclinedScreen(mut state: Signal<ViewerAppState>) -> Element {
    let record = state.read().record.clone();
    let style = background_style(record.background_theme, &record.color_theme);

    rsx! {
        div {
            class: "screen-container",
            style: "{style}",
            div {
                class: "screen-content fade-in",

                h1 { class: "respect-title", "Thank you for being honest 🤍" }
                p { class: "respect-text", "{record.response_options.no.follow_up}" }
                p { class: "respect-subtext", "Take care 💫" }

                ReplayLink { state }
            }
        }
    }
}

/// Optional free-text reply capture.
///
/// "Sending" only logs and flips a flag: the reply is never persisted or
/// delivered anywhere.
#[component]
fn ReplyBox(
    mut state: Signal<ViewerAppState>,
    kind: ResponseKind,
    label: &'static str,
    placeholder: &'static str,
    button_label: &'static str,
) -> Element {
    let reply_sent = state.read().reply_sent;

    rsx! {
        div {
            class: "reply-box",

            if !label.is_empty() {
                p { class: "reply-label", "{label}" }
            }

            if reply_sent {
                p { class: "reply-sent-note", "Sent 💌" }
            } else {
                textarea {
                    class: "reply-input",
                    rows: 3,
                    placeholder: "{placeholder}",
                    value: "{state.read().reply_draft}",
                    oninput: move |evt| {
                        state.write().reply_draft = evt.value();
                    },
                }
                button {
                    class: "send-reply-btn",
                    onclick: move |_| {
                        let reply = state.read().reply_draft.clone();
                        tracing::info!(
                            response = kind.as_str(),
                            reply = %reply,
                            "Reply captured (view-only, not persisted)"
                        );
                        state.write().reply_sent = true;
                    },
                    "{button_label}"
                }
            }
        }
    }
}

/// Replay affordance offered on every terminal screen.
#[component]
fn ReplayLink(mut state: Signal<ViewerAppState>) -> Element {
    rsx! {
        button {
            class: "replay-link",
            onclick: move |_| {
                state.write().replay();
            },
            "↺ Watch it again"
        }
    }
}
