//! Sequence-screen components shared by the editor preview and the viewer.

use dioxus::prelude::*;
use invites_core::{InvitationRecord, Stage};

use crate::format::{format_date, format_time};

/// Fixed copy of the emotional warm-up screen.
const WARM_UP_LINE: &str = "They've been wanting to ask you something…";

/// Full-screen tappable surface wrapping one screen's content.
#[component]
pub fn ScreenSurface(style: String, on_tap: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "screen-container",
            style: "{style}",
            onclick: move |_| on_tap.call(()),
            div {
                class: "screen-content fade-in",
                {children}
            }
        }
    }
}

/// "Tap to continue" affordance shown on advanceable screens.
#[component]
pub fn TapHint(label: String) -> Element {
    rsx! {
        div { class: "tap-hint", "{label}" }
    }
}

/// Content of one pre-branch story screen (screens 1 through 5).
///
/// Renders nothing for `Options` and branch stages; those screens carry
/// controls and are assembled by the owning app.
#[component]
pub fn StoryScreen(record: InvitationRecord, stage: Stage) -> Element {
    match stage {
        Stage::CuriosityHook => rsx! {
            p { class: "subtle-text", "{record.opening_line}" }
        },
        Stage::WarmUp => rsx! {
            p { class: "anticipation-text", "{WARM_UP_LINE}" }
        },
        Stage::PersonalTouch => rsx! {
            p { class: "personal-text",
                "Because you're "
                span { class: "highlight", "{record.traits}" }
                "."
            }
        },
        Stage::Vulnerability => rsx! {
            p { class: "vulnerable-text", "{record.vulnerability_line}" }
        },
        Stage::TheAsk => rsx! {
            h1 { class: "the-ask", "{record.invitation_sentence}" }
        },
        _ => rsx! {},
    }
}

/// The 📅 / 🕐 / 📍 detail block on the options screen.
#[component]
pub fn DateDetails(record: InvitationRecord) -> Element {
    let date = format_date(record.date);
    let time = format_time(record.time);

    rsx! {
        div { class: "date-details",
            p { class: "detail-line", "📅 {date}" }
            p { class: "detail-line", "🕐 {time}" }
            p { class: "detail-line", "📍 {record.location}" }
        }
    }
}
