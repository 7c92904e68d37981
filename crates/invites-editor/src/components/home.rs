//! Landing screen with the create/browse entry points.

use dioxus::prelude::*;

use crate::state::{EditorScreen, EditorState};

#[component]
pub fn HomeScreen(mut state: Signal<EditorState>) -> Element {
    rsx! {
        div {
            class: "home-screen",

            div {
                class: "hero",
                h1 {
                    class: "hero-title",
                    "Create Beautiful "
                    span { class: "hero-highlight", "Date Invitations" }
                }
                p {
                    class: "hero-description",
                    "Send romantic invitations to your special someone. Create personalized "
                    "date invites with ease and make every moment memorable."
                }
                div {
                    class: "hero-actions",
                    button {
                        class: "btn-primary",
                        onclick: move |_| {
                            state.write().screen = EditorScreen::Wizard;
                        },
                        "Create Invitation"
                    }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| {
                            state.write().screen = EditorScreen::ThemeGallery;
                        },
                        "View Examples"
                    }
                }
            }

            div {
                class: "feature-row",
                div {
                    class: "feature-card",
                    div { class: "feature-icon", "💌" }
                    h3 { "Personalized" }
                    p { "Customize every detail to make it uniquely yours" }
                }
                div {
                    class: "feature-card",
                    div { class: "feature-icon", "🎨" }
                    h3 { "Beautiful Design" }
                    p { "Stunning templates that capture the moment" }
                }
                div {
                    class: "feature-card",
                    div { class: "feature-icon", "⚡" }
                    h3 { "Instant Share" }
                    p { "Send invitations instantly via unique links" }
                }
            }
        }
    }
}
