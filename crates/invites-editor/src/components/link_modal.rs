//! Share-link modal shown after publishing.

use dioxus::prelude::*;
use tokio::time::{sleep, Duration};

use invites_share::{mailto_link, sms_link, whatsapp_link};
use invites_storage::PublishedInvite;

use crate::state::EditorState;

#[component]
pub fn LinkModal(mut state: Signal<EditorState>) -> Element {
    let generated = state.read().generated.clone();
    let error = state.read().publish_error.clone();
    let copied = state.read().link_copied;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| {
                state.write().close_link_modal();
            },

            div {
                class: "modal-content",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "modal-close-btn",
                    onclick: move |_| {
                        state.write().close_link_modal();
                    },
                    "✕"
                }

                match (error, generated) {
                    (Some(err), _) => rsx! {
                        div {
                            class: "modal-header",
                            h2 { class: "modal-title", "Something went wrong" }
                            p { class: "modal-subtitle", "{err}" }
                        }
                    },
                    (None, Some(published)) => rsx! {
                        ModalBody { state, published, copied }
                    },
                    (None, None) => rsx! {},
                }
            }
        }
    }
}

/// Successful-publish contents: the link, copy button, and share options.
#[component]
fn ModalBody(
    mut state: Signal<EditorState>,
    published: PublishedInvite,
    copied: bool,
) -> Element {
    rsx! {
        div {
            class: "modal-header",
            div { class: "success-icon", "🎉" }
            h2 { class: "modal-title", "Link Generated!" }
            p { class: "modal-subtitle", "Share this link with your special someone" }
        }

        div {
            class: "link-container",
            input {
                class: "link-input",
                r#type: "text",
                readonly: true,
                value: "{published.url}",
            }
            button {
                class: "copy-btn",
                onclick: {
                    let url = published.url.clone();
                    move |_| {
                        // Copy failures are silently ignored.
                        if let Ok(mut clipboard) = arboard::Clipboard::new() {
                            let _ = clipboard.set_text(url.clone());
                        }
                        state.write().link_copied = true;
                        spawn(async move {
                            sleep(Duration::from_secs(2)).await;
                            state.write().link_copied = false;
                        });
                    }
                },
                if copied { "✓ Copied!" } else { "📋 Copy" }
            }
        }

        div {
            class: "share-options",
            p { class: "share-label", "Or share via:" }
            div {
                class: "share-buttons",
                a {
                    class: "share-btn",
                    href: "{sms_link(&published.url)}",
                    "💬 Text"
                }
                a {
                    class: "share-btn",
                    href: "{mailto_link(&published.url)}",
                    "📧 Email"
                }
                a {
                    class: "share-btn",
                    href: "{whatsapp_link(&published.url)}",
                    target: "_blank",
                    "📱 WhatsApp"
                }
            }
        }
    }
}
