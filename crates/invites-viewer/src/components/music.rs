//! Background music side-channel.
//!
//! Mounted at the app root, outside the screen subtree, so the player
//! survives screen transitions. A media reference that doesn't parse means
//! the channel never activates; no error is surfaced.

use dioxus::prelude::*;

use invites_share::{embed_url, video_id};

use crate::state::ViewerAppState;

#[component]
pub fn MusicToggle(mut state: Signal<ViewerAppState>) -> Element {
    let record = state.read().record.clone();
    if !record.enable_music {
        return rsx! {};
    }

    let Some(id) = record.youtube_link.as_deref().and_then(video_id) else {
        return rsx! {};
    };
    let playing = state.read().music_playing;
    let embed = embed_url(&id);

    rsx! {
        button {
            class: "music-toggle",
            onclick: move |evt| {
                evt.stop_propagation();
                let playing = state.read().music_playing;
                state.write().music_playing = !playing;
            },
            if playing { "🔊" } else { "🎵" }
        }

        if playing {
            iframe {
                class: "music-frame",
                src: "{embed}",
                allow: "autoplay",
                title: "background music",
            }
        }
    }
}
