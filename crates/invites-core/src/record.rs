//! The invitation record: the serialized content unit.
//!
//! Records are written once at link-generation time and read once at
//! viewer-load time. Field names serialize as camelCase so stored records
//! keep the original storage format.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Opening line of the built-in sample record, shown when a viewer loads an
/// unknown key.
pub const SAMPLE_OPENING_LINE: &str = "Hey 👋 Someone made something for you…";

/// The three response kinds a recipient can pick from.
///
/// The set is fixed: no kind can be added or removed after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Yes,
    Maybe,
    No,
}

impl ResponseKind {
    /// All kinds, in display order.
    pub fn all() -> [ResponseKind; 3] {
        [ResponseKind::Yes, ResponseKind::Maybe, ResponseKind::No]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Yes => "yes",
            ResponseKind::Maybe => "maybe",
            ResponseKind::No => "no",
        }
    }
}

/// One configurable response option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseOption {
    /// Whether the viewer offers this option at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Button label shown on the options screen.
    pub label: String,
    /// Follow-up message shown after this option is chosen.
    pub follow_up: String,
}

fn default_enabled() -> bool {
    true
}

/// The fixed yes/maybe/no option set.
///
/// Modeled as three named fields rather than a map: the invariant that
/// exactly these three kinds exist is carried by the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseOptions {
    pub yes: ResponseOption,
    pub maybe: ResponseOption,
    pub no: ResponseOption,
}

impl ResponseOptions {
    pub fn get(&self, kind: ResponseKind) -> &ResponseOption {
        match kind {
            ResponseKind::Yes => &self.yes,
            ResponseKind::Maybe => &self.maybe,
            ResponseKind::No => &self.no,
        }
    }

    pub fn get_mut(&mut self, kind: ResponseKind) -> &mut ResponseOption {
        match kind {
            ResponseKind::Yes => &mut self.yes,
            ResponseKind::Maybe => &mut self.maybe,
            ResponseKind::No => &mut self.no,
        }
    }

    /// Kinds the viewer should render, in display order.
    pub fn enabled_kinds(&self) -> Vec<ResponseKind> {
        ResponseKind::all()
            .into_iter()
            .filter(|k| self.get(*k).enabled)
            .collect()
    }
}

impl Default for ResponseOptions {
    fn default() -> Self {
        Self {
            yes: ResponseOption {
                enabled: true,
                label: "💖 Yes, I'd love to".to_string(),
                follow_up: "I can't wait! This is going to be wonderful.".to_string(),
            },
            maybe: ResponseOption {
                enabled: true,
                label: "😊 Maybe, tell me more".to_string(),
                follow_up: "No pressure! Would it help if we talk about the details? I'm flexible."
                    .to_string(),
            },
            no: ResponseOption {
                enabled: true,
                label: "🤍 I'm flattered, but no".to_string(),
                follow_up: "Thank you for being honest. Your friendship means a lot to me."
                    .to_string(),
            },
        }
    }
}

/// Background treatment for the invitation screens. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundTheme {
    #[default]
    Gradient,
    Solid,
    Pattern,
}

/// Overall tone of the invitation. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Cute,
    Calm,
    Confident,
    #[default]
    Romantic,
    Playful,
}

impl Tone {
    pub fn all() -> &'static [Tone] {
        &[
            Tone::Cute,
            Tone::Calm,
            Tone::Confident,
            Tone::Romantic,
            Tone::Playful,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tone::Cute => "Cute",
            Tone::Calm => "Calm",
            Tone::Confident => "Confident",
            Tone::Romantic => "Romantic",
            Tone::Playful => "Playful",
        }
    }
}

/// The serialized invitation content unit. Immutable once generated:
/// regenerating a link produces a new record under a new key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRecord {
    pub opening_line: String,
    pub traits: String,
    pub vulnerability_line: String,
    pub invitation_sentence: String,

    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub location: String,

    pub response_options: ResponseOptions,

    #[serde(default)]
    pub enable_music: bool,
    /// Opaque external media reference; validity is not checked at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_link: Option<String>,

    #[serde(default)]
    pub background_theme: BackgroundTheme,
    #[serde(default = "default_color_theme")]
    pub color_theme: String,
    #[serde(default)]
    pub tone: Tone,
}

fn default_color_theme() -> String {
    "#ff91af".to_string()
}

impl InvitationRecord {
    /// Serializes the record to the stored JSON text form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a record from stored JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Wall-clock times are stored as `HH:MM`, no seconds, no timezone.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(de)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

/// The fixed built-in sample record.
///
/// The viewer falls back to this when a key resolves to nothing: a degrade-
/// to-demo policy, not an error surfaced to the recipient.
pub fn sample_record() -> InvitationRecord {
    InvitationRecord {
        opening_line: SAMPLE_OPENING_LINE.to_string(),
        traits: "kind, fun, and easy to smile around".to_string(),
        vulnerability_line: "This was a little scary to send…".to_string(),
        invitation_sentence: "Would you like to go on a date with me?".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 2, 14).expect("valid date"),
        time: NaiveTime::from_hms_opt(19, 30, 0).expect("valid time"),
        location: "Carbone Restaurant".to_string(),
        response_options: ResponseOptions::default(),
        enable_music: false,
        youtube_link: None,
        background_theme: BackgroundTheme::Gradient,
        color_theme: default_color_theme(),
        tone: Tone::Romantic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_json_uses_camel_case_and_hhmm() {
        let record = sample_record();
        let json = record.to_json().unwrap();

        assert!(json.contains("\"openingLine\""));
        assert!(json.contains("\"responseOptions\""));
        assert!(json.contains("\"followUp\""));
        assert!(json.contains("\"2026-02-14\""));
        assert!(json.contains("\"19:30\""));
        assert!(!json.contains("\"youtubeLink\""));
    }

    #[test]
    fn record_round_trips() {
        let record = sample_record();
        let json = record.to_json().unwrap();
        let parsed = InvitationRecord::from_json(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn record_parses_without_optional_presentation_fields() {
        // Shape of the original mock data: no enabled flags, no music or
        // theme fields.
        let json = r#"{
            "openingLine": "Hey 👋 Someone made something for you…",
            "traits": "kind, fun, and easy to smile around",
            "vulnerabilityLine": "This was a little scary to send…",
            "invitationSentence": "Would you like to go on a date with me?",
            "date": "2026-02-14",
            "time": "19:30",
            "location": "Carbone Restaurant",
            "responseOptions": {
                "yes": {"label": "💖 Yes, I'd love to", "followUp": "I can't wait!"},
                "maybe": {"label": "😊 Maybe, tell me more", "followUp": "No pressure!"},
                "no": {"label": "🤍 I'm flattered, but no", "followUp": "Thank you."}
            }
        }"#;

        let record = InvitationRecord::from_json(json).unwrap();
        assert_eq!(record.opening_line, SAMPLE_OPENING_LINE);
        assert!(record.response_options.yes.enabled);
        assert!(!record.enable_music);
        assert_eq!(record.background_theme, BackgroundTheme::Gradient);
        assert_eq!(record.color_theme, "#ff91af");
    }

    #[test]
    fn time_accepts_seconds_form() {
        let json = r#""19:30:00""#;
        #[derive(serde::Deserialize)]
        struct T(#[serde(with = "super::hhmm")] NaiveTime);
        let t: T = serde_json::from_str(json).unwrap();
        assert_eq!(t.0, NaiveTime::from_hms_opt(19, 30, 0).unwrap());
    }

    #[test]
    fn enabled_kinds_respects_flags() {
        let mut options = ResponseOptions::default();
        options.maybe.enabled = false;

        assert_eq!(
            options.enabled_kinds(),
            vec![ResponseKind::Yes, ResponseKind::No]
        );
    }
}
