//! Background-media reference parsing.
//!
//! The record carries an opaque media URL; the viewer derives a looping
//! embed from it. A reference that doesn't parse yields `None` and the
//! audio side-channel simply does not activate.

use url::Url;

/// Extracts the video identifier from a YouTube URL.
///
/// Accepts the `watch?v=`, `youtu.be/`, and `embed/` shapes.
pub fn video_id(link: &str) -> Option<String> {
    let url = Url::parse(link.trim()).ok()?;
    let host = url.host_str()?.trim_start_matches("www.");

    let id = match host {
        "youtube.com" | "m.youtube.com" | "music.youtube.com" => {
            let mut segments = url.path_segments()?;
            match segments.next() {
                Some("watch") => url
                    .query_pairs()
                    .find(|(k, _)| k == "v")
                    .map(|(_, v)| v.into_owned()),
                Some("embed") | Some("shorts") => segments.next().map(str::to_string),
                _ => None,
            }
        }
        "youtu.be" => url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(str::to_string),
        _ => None,
    }?;

    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return None;
    }
    Some(id)
}

/// Embed URL for a looping, autoplaying background player.
pub fn embed_url(id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{id}?autoplay=1&loop=1&playlist={id}&controls=0"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_watch_short_and_embed_shapes() {
        for link in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ&t=42",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
        ] {
            assert_eq!(video_id(link).as_deref(), Some("dQw4w9WgXcQ"), "{link}");
        }
    }

    #[test]
    fn rejects_malformed_references() {
        for link in [
            "",
            "not a url",
            "https://example.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch",
            "https://www.youtube.com/watch?v=bad id!",
        ] {
            assert_eq!(video_id(link), None, "{link}");
        }
    }

    #[test]
    fn embed_url_loops_the_same_video() {
        let url = embed_url("dQw4w9WgXcQ");
        assert!(url.contains("embed/dQw4w9WgXcQ"));
        assert!(url.contains("loop=1"));
        assert!(url.contains("playlist=dQw4w9WgXcQ"));
    }
}
