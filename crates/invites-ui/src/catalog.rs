//! The static theme catalog.
//!
//! Read-only reference data: eight curated themes, each with a complete
//! sample invitation the gallery replays through the sequencer.

use invites_core::{BackgroundTheme, InvitationDraft, Tone};

/// Sample invitation content shown in a theme's demo replay.
///
/// Dates and times here are display text, not calendar values: "This
/// weekend" is a perfectly good sample date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSample {
    pub sender_name: &'static str,
    pub opening_line: &'static str,
    pub traits: &'static str,
    pub vulnerability_line: &'static str,
    pub invitation_sentence: &'static str,
    pub date_type: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
}

/// One entry in the theme catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeData {
    pub id: &'static str,
    pub name: &'static str,
    pub tone: Tone,
    pub color_theme: &'static str,
    pub background_theme: BackgroundTheme,
    pub description: &'static str,
    pub preview: &'static str,
    pub sample: ThemeSample,
}

impl ThemeData {
    /// Seeds a fresh draft with this theme's presentation choices.
    pub fn seed_draft(&self) -> InvitationDraft {
        InvitationDraft {
            tone: self.tone,
            color_theme: self.color_theme.to_string(),
            background_theme: self.background_theme,
            ..InvitationDraft::default()
        }
    }
}

static THEMES: [ThemeData; 8] = [
    ThemeData {
        id: "romantic-sunset",
        name: "Romantic Sunset",
        tone: Tone::Romantic,
        color_theme: "#ff91af",
        background_theme: BackgroundTheme::Gradient,
        description: "Warm, romantic vibes with soft pink tones",
        preview: "Perfect for a heartfelt dinner invitation",
        sample: ThemeSample {
            sender_name: "Alex",
            opening_line: "Hey 👋 Someone made something special for you…",
            traits: "You make me smile every time we talk, and your laugh is contagious.",
            vulnerability_line: "I've been thinking about this for a while…",
            invitation_sentence: "Would you like to have dinner with me?",
            date_type: "dinner",
            date: "February 14, 2026",
            time: "7:00 PM",
            location: "That cozy Italian place downtown",
        },
    },
    ThemeData {
        id: "cute-pastel",
        name: "Cute Pastel",
        tone: Tone::Cute,
        color_theme: "#ffb3d9",
        background_theme: BackgroundTheme::Gradient,
        description: "Sweet and playful with pastel colors",
        preview: "Great for a casual coffee date",
        sample: ThemeSample {
            sender_name: "Jamie",
            opening_line: "Hi! ✨ You've got a cute invitation waiting…",
            traits: "You're so much fun to be around and your energy is amazing!",
            vulnerability_line: "I'm a bit nervous but excited to ask…",
            invitation_sentence: "Want to grab coffee with me? ☕",
            date_type: "coffee",
            date: "January 15, 2026",
            time: "2:00 PM",
            location: "The cute café near the park",
        },
    },
    ThemeData {
        id: "calm-ocean",
        name: "Calm Ocean",
        tone: Tone::Calm,
        color_theme: "#6eb5ff",
        background_theme: BackgroundTheme::Gradient,
        description: "Serene and peaceful blue tones",
        preview: "Ideal for a relaxing walk or quiet moment",
        sample: ThemeSample {
            sender_name: "Morgan",
            opening_line: "Hello 🌊 A peaceful invitation awaits you…",
            traits: "I really enjoy our conversations and the calm energy you bring.",
            vulnerability_line: "I'd love to spend more time with you…",
            invitation_sentence: "Would you like to take a walk by the beach?",
            date_type: "walk",
            date: "January 20, 2026",
            time: "5:00 PM",
            location: "Sunset Beach boardwalk",
        },
    },
    ThemeData {
        id: "confident-bold",
        name: "Confident Bold",
        tone: Tone::Confident,
        color_theme: "#ff6b6b",
        background_theme: BackgroundTheme::Solid,
        description: "Strong and direct with bold colors",
        preview: "For when you want to make a statement",
        sample: ThemeSample {
            sender_name: "Taylor",
            opening_line: "Hey! 💪 I've got something to ask you…",
            traits: "You're confident, smart, and someone I genuinely want to know better.",
            vulnerability_line: "I believe in being direct, so here it is…",
            invitation_sentence: "Let's go on a date. What do you say?",
            date_type: "dinner",
            date: "January 25, 2026",
            time: "8:00 PM",
            location: "The rooftop bar downtown",
        },
    },
    ThemeData {
        id: "playful-fun",
        name: "Playful Fun",
        tone: Tone::Playful,
        color_theme: "#ffd93d",
        background_theme: BackgroundTheme::Pattern,
        description: "Energetic and fun with bright colors",
        preview: "Perfect for a spontaneous adventure",
        sample: ThemeSample {
            sender_name: "Riley",
            opening_line: "Yo! 🎉 Something fun is coming your way…",
            traits: "You're hilarious and every moment with you is an adventure!",
            vulnerability_line: "Okay, this is a bit wild but…",
            invitation_sentence: "Want to go on a spontaneous adventure with me?",
            date_type: "surprise",
            date: "This weekend",
            time: "10:00 AM",
            location: "It's a surprise! 😉",
        },
    },
    ThemeData {
        id: "elegant-dark",
        name: "Elegant Dark",
        tone: Tone::Romantic,
        color_theme: "#2d2d2d",
        background_theme: BackgroundTheme::Solid,
        description: "Sophisticated and mysterious",
        preview: "For an upscale dining experience",
        sample: ThemeSample {
            sender_name: "Chris",
            opening_line: "Good evening 🌙 An elegant invitation for you…",
            traits: "Your sophistication and grace never cease to impress me.",
            vulnerability_line: "I'd be honored if you'd consider…",
            invitation_sentence: "Would you join me for dinner at an upscale restaurant?",
            date_type: "dinner",
            date: "January 30, 2026",
            time: "8:30 PM",
            location: "The Grand Bistro",
        },
    },
    ThemeData {
        id: "spring-bloom",
        name: "Spring Bloom",
        tone: Tone::Cute,
        color_theme: "#f8b4d9",
        background_theme: BackgroundTheme::Pattern,
        description: "Fresh and blooming with floral vibes",
        preview: "Great for a spring picnic date",
        sample: ThemeSample {
            sender_name: "Sam",
            opening_line: "Hi there! 🌸 Spring has brought something special…",
            traits: "Your warmth and kindness brighten my day like sunshine!",
            vulnerability_line: "I'd love to spend a beautiful day with you…",
            invitation_sentence: "Want to have a picnic in the park with me?",
            date_type: "walk",
            date: "March 21, 2026",
            time: "12:00 PM",
            location: "Cherry Blossom Park",
        },
    },
    ThemeData {
        id: "minimalist-clean",
        name: "Minimalist Clean",
        tone: Tone::Calm,
        color_theme: "#ffffff",
        background_theme: BackgroundTheme::Solid,
        description: "Simple and elegant with clean lines",
        preview: "For those who prefer simplicity",
        sample: ThemeSample {
            sender_name: "Jordan",
            opening_line: "Hello. Something simple yet meaningful for you…",
            traits: "I appreciate your thoughtfulness and the depth of our conversations.",
            vulnerability_line: "In the simplest way, I want to ask…",
            invitation_sentence: "Would you like to spend some time together?",
            date_type: "coffee",
            date: "February 5, 2026",
            time: "3:00 PM",
            location: "The quiet bookshop café",
        },
    },
];

/// All catalog themes, in display order.
pub fn theme_catalog() -> &'static [ThemeData] {
    &THEMES
}

/// Looks up a theme by its identifier.
pub fn theme_by_id(id: &str) -> Option<&'static ThemeData> {
    THEMES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eight_unique_ids() {
        let catalog = theme_catalog();
        assert_eq!(catalog.len(), 8);

        let mut ids: Vec<_> = catalog.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn lookup_by_id() {
        let theme = theme_by_id("calm-ocean").unwrap();
        assert_eq!(theme.name, "Calm Ocean");
        assert_eq!(theme.tone, Tone::Calm);
        assert!(theme_by_id("missing-theme").is_none());
    }

    #[test]
    fn seed_draft_takes_presentation_only() {
        let theme = theme_by_id("elegant-dark").unwrap();
        let draft = theme.seed_draft();

        assert_eq!(draft.tone, Tone::Romantic);
        assert_eq!(draft.color_theme, "#2d2d2d");
        assert_eq!(draft.background_theme, BackgroundTheme::Solid);
        // Content stays the stock defaults, not the sample's.
        assert!(draft.traits.is_empty());
    }
}
