//! Share deep links embedding the viewer URL.
//!
//! Each link carries the fixed share sentence plus the viewer URL; there is
//! no delivery confirmation of any kind.

use url::Url;

/// Fixed sentence embedded in every share link.
pub const SHARE_SENTENCE: &str = "Someone made something special for you!";

/// Subject line for the email share link.
pub const SHARE_SUBJECT: &str = "You have a special invitation";

/// SMS deep link with the share sentence and viewer URL in the body.
pub fn sms_link(invite_url: &str) -> String {
    let mut url = Url::parse("sms:").expect("static URL parses");
    url.query_pairs_mut()
        .append_pair("body", &format!("{} {}", SHARE_SENTENCE, invite_url));
    url.to_string()
}

/// `mailto:` link with a fixed subject and the viewer URL in the body.
pub fn mailto_link(invite_url: &str) -> String {
    let mut url = Url::parse("mailto:").expect("static URL parses");
    url.query_pairs_mut()
        .append_pair("subject", SHARE_SUBJECT)
        .append_pair(
            "body",
            &format!("{} Open this link: {}", SHARE_SENTENCE, invite_url),
        );
    url.to_string()
}

/// WhatsApp deep link with the share sentence and viewer URL as the text.
pub fn whatsapp_link(invite_url: &str) -> String {
    let mut url = Url::parse("https://wa.me/").expect("static URL parses");
    url.query_pairs_mut()
        .append_pair("text", &format!("{} {}", SHARE_SENTENCE, invite_url));
    url.to_string()
}

/// Extracts the invite key from a viewer URL, or passes a bare key through.
///
/// The viewer route is addressed by a single opaque identifier: the trailing
/// path segment of `…/invite/<key>`.
pub fn parse_invite_key(input: &str) -> Option<String> {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(url) = Url::parse(trimmed) {
        let segment = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .map(str::to_string);
        return segment.filter(|s| !s.is_empty());
    }

    // Not a URL: treat the whole input as a key.
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sms_link_embeds_sentence_and_url() {
        let link = sms_link("https://loveinvites.app/invite/abc123");
        assert!(link.starts_with("sms:?body="));
        assert!(link.contains("loveinvites.app"));
        assert!(link.contains("abc123"));
    }

    #[test]
    fn mailto_link_has_subject_and_body() {
        let link = mailto_link("https://loveinvites.app/invite/abc123");
        assert!(link.starts_with("mailto:?"));
        assert!(link.contains("subject="));
        assert!(link.contains("body="));
    }

    #[test]
    fn whatsapp_link_encodes_text() {
        let link = whatsapp_link("https://loveinvites.app/invite/abc123");
        assert!(link.starts_with("https://wa.me/?text="));
        assert!(link.contains("abc123"));
    }

    #[test]
    fn parse_invite_key_accepts_url_or_bare_key() {
        assert_eq!(
            parse_invite_key("https://loveinvites.app/invite/abc123").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            parse_invite_key("https://loveinvites.app/invite/abc123/").as_deref(),
            Some("abc123")
        );
        assert_eq!(parse_invite_key("abc123").as_deref(), Some("abc123"));
        assert_eq!(parse_invite_key("  abc123  ").as_deref(), Some("abc123"));
        assert_eq!(parse_invite_key(""), None);
    }
}
