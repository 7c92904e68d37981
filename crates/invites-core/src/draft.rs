//! The editor-side draft: an in-progress, not-yet-shared invitation.
//!
//! The draft holds every record field as entered in the wizard, plus
//! authoring-only fields (names, date type, animation speed) that never
//! leave the editor. Finalizing validates and produces an immutable
//! [`InvitationRecord`].

use chrono::{NaiveDate, NaiveTime};

use crate::error::DraftError;
use crate::record::{BackgroundTheme, InvitationRecord, ResponseOptions, Tone};

/// Example chips offered under the opening-line field.
pub const OPENING_LINE_EXAMPLES: [&str; 4] = [
    "Hey 👋 Someone made something for you…",
    "You have a special invitation waiting…",
    "Someone's been thinking about you…",
    "This is for you 💌",
];

/// Example chips offered under the traits field.
pub const TRAITS_EXAMPLES: [&str; 4] = [
    "kind, fun, and easy to smile around",
    "thoughtful, genuine, and full of light",
    "sweet, funny, and impossible not to think about",
    "warm, caring, and truly special",
];

/// Example chips offered under the vulnerability-line field.
pub const VULNERABILITY_EXAMPLES: [&str; 4] = [
    "This was a little scary to send…",
    "I've been nervous about asking this…",
    "Took some courage to make this…",
    "Hope this doesn't feel too forward…",
];

/// Example chips offered under the main-invitation field.
pub const INVITATION_EXAMPLES: [&str; 4] = [
    "Would you like to go on a date with me?",
    "Want to spend some time together?",
    "Can I take you out sometime?",
    "I'd love to get to know you better. Interested?",
];

/// Example chips offered under the location field.
pub const LOCATION_EXAMPLES: [&str; 4] = [
    "That cozy café downtown",
    "The new restaurant everyone's talking about",
    "A quiet spot by the park",
    "Somewhere special I found",
];

/// How fast preview animations run. Authoring-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

/// The kind of date being proposed. Authoring-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateType {
    Coffee,
    #[default]
    Dinner,
    Walk,
    Surprise,
    Custom,
}

impl DateType {
    /// The preset kinds, excluding `Custom`.
    pub fn presets() -> &'static [DateType] {
        &[
            DateType::Coffee,
            DateType::Dinner,
            DateType::Walk,
            DateType::Surprise,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DateType::Coffee => "Coffee",
            DateType::Dinner => "Dinner",
            DateType::Walk => "Walk",
            DateType::Surprise => "Surprise",
            DateType::Custom => "Custom",
        }
    }
}

/// An in-progress invitation as held by the wizard.
///
/// Date and time stay as raw input text until finalize so the form can hold
/// partial entries without losing what the user typed.
#[derive(Debug, Clone, PartialEq)]
pub struct InvitationDraft {
    pub receiver_name: String,
    pub sender_name: String,
    pub is_anonymous: bool,

    pub tone: Tone,
    pub color_theme: String,
    pub animation_speed: AnimationSpeed,

    pub opening_line: String,
    pub traits: String,
    pub vulnerability_line: String,
    pub date_type: DateType,
    pub custom_date_type: String,
    pub invitation_sentence: String,

    pub date: String,
    pub time: String,
    pub location: String,

    pub response_options: ResponseOptions,

    pub enable_music: bool,
    pub youtube_link: String,
    pub background_theme: BackgroundTheme,
}

impl Default for InvitationDraft {
    fn default() -> Self {
        Self {
            receiver_name: String::new(),
            sender_name: String::new(),
            is_anonymous: false,
            tone: Tone::Romantic,
            color_theme: "#ff91af".to_string(),
            animation_speed: AnimationSpeed::Medium,
            opening_line: OPENING_LINE_EXAMPLES[0].to_string(),
            traits: String::new(),
            vulnerability_line: VULNERABILITY_EXAMPLES[0].to_string(),
            date_type: DateType::Dinner,
            custom_date_type: String::new(),
            invitation_sentence: INVITATION_EXAMPLES[0].to_string(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            response_options: ResponseOptions::default(),
            enable_music: false,
            youtube_link: String::new(),
            background_theme: BackgroundTheme::Gradient,
        }
    }
}

impl InvitationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the draft and produces the immutable record to publish.
    pub fn finalize(&self) -> Result<InvitationRecord, DraftError> {
        if self.opening_line.trim().is_empty() {
            return Err(DraftError::MissingField("opening line"));
        }
        if self.traits.trim().is_empty() {
            return Err(DraftError::MissingField("traits"));
        }
        if self.invitation_sentence.trim().is_empty() {
            return Err(DraftError::MissingField("invitation sentence"));
        }
        if self.location.trim().is_empty() {
            return Err(DraftError::MissingField("location"));
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDate(self.date.clone()))?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| DraftError::InvalidTime(self.time.clone()))?;

        let youtube_link = match self.youtube_link.trim() {
            "" => None,
            link => Some(link.to_string()),
        };

        Ok(InvitationRecord {
            opening_line: self.opening_line.clone(),
            traits: self.traits.clone(),
            vulnerability_line: self.vulnerability_line.clone(),
            invitation_sentence: self.invitation_sentence.clone(),
            date,
            time,
            location: self.location.clone(),
            response_options: self.response_options.clone(),
            enable_music: self.enable_music,
            youtube_link,
            background_theme: self.background_theme,
            color_theme: self.color_theme.clone(),
            tone: self.tone,
        })
    }

    /// Whether finalize would succeed, for gating the preview button.
    pub fn is_complete(&self) -> bool {
        self.finalize().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SAMPLE_OPENING_LINE;

    fn filled_draft() -> InvitationDraft {
        InvitationDraft {
            traits: TRAITS_EXAMPLES[0].to_string(),
            date: "2026-02-14".to_string(),
            time: "19:30".to_string(),
            location: "Carbone Restaurant".to_string(),
            ..InvitationDraft::default()
        }
    }

    #[test]
    fn default_draft_carries_stock_copy() {
        let draft = InvitationDraft::default();
        assert_eq!(draft.opening_line, SAMPLE_OPENING_LINE);
        assert_eq!(draft.response_options.yes.label, "💖 Yes, I'd love to");
        assert!(!draft.is_complete());
    }

    #[test]
    fn finalize_produces_matching_record() {
        let record = filled_draft().finalize().unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 2, 14).unwrap());
        assert_eq!(record.time, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
        assert_eq!(record.youtube_link, None);
    }

    #[test]
    fn finalize_rejects_missing_traits() {
        let mut draft = filled_draft();
        draft.traits = "   ".to_string();
        assert!(matches!(
            draft.finalize(),
            Err(DraftError::MissingField("traits"))
        ));
    }

    #[test]
    fn finalize_rejects_bad_date_and_time() {
        let mut draft = filled_draft();
        draft.date = "02/14/2026".to_string();
        assert!(matches!(draft.finalize(), Err(DraftError::InvalidDate(_))));

        let mut draft = filled_draft();
        draft.time = "7:30 PM".to_string();
        assert!(matches!(draft.finalize(), Err(DraftError::InvalidTime(_))));
    }

    #[test]
    fn finalize_keeps_nonempty_media_link() {
        let mut draft = filled_draft();
        draft.enable_music = true;
        draft.youtube_link = "https://youtu.be/dQw4w9WgXcQ".to_string();

        let record = draft.finalize().unwrap();
        assert!(record.enable_music);
        assert_eq!(
            record.youtube_link.as_deref(),
            Some("https://youtu.be/dQw4w9WgXcQ")
        );
    }
}
