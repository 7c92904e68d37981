//! State management for the editor flow.

use invites_core::{InvitationDraft, Tone, ViewerSession};
use invites_storage::PublishedInvite;

/// Number of wizard form steps.
pub const WIZARD_STEPS: usize = 4;

/// The current screen in the editor flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorScreen {
    /// Landing screen with the create/browse entry points.
    Home,
    /// The four-step authoring form.
    Wizard,
    /// Timed preview of the drafted invitation.
    Preview,
    /// Theme gallery grid.
    ThemeGallery,
    /// Demo replay of one catalog theme.
    ThemeDemo(String),
}

/// Main state for the editor flow.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Current screen.
    pub screen: EditorScreen,
    /// Wizard form step, 1-based.
    pub wizard_step: usize,
    /// The invitation being authored.
    pub draft: InvitationDraft,

    /// Sequencer driving the preview replay.
    pub session: ViewerSession,
    /// Whether the replay/share controls have appeared on the options screen.
    pub controls_shown: bool,

    /// Whether the link modal is open.
    pub link_modal_open: bool,
    /// The most recently published link.
    pub generated: Option<PublishedInvite>,
    /// Brief "Copied!" feedback after copying the link.
    pub link_copied: bool,
    /// Publish failure shown inside the modal.
    pub publish_error: Option<String>,

    /// Tone filter on the theme gallery; `None` shows everything.
    pub tone_filter: Option<Tone>,
    /// Sequencer driving a theme demo replay.
    pub demo_session: ViewerSession,
    /// Whether the theme demo shows all screens at once instead of animating.
    pub demo_show_all: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            screen: EditorScreen::Home,
            wizard_step: 1,
            draft: InvitationDraft::new(),
            session: ViewerSession::new(),
            controls_shown: false,
            link_modal_open: false,
            generated: None,
            link_copied: false,
            publish_error: None,
            tone_filter: None,
            demo_session: ViewerSession::new(),
            demo_show_all: false,
        }
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters the preview with a fresh session.
    pub fn start_preview(&mut self) {
        self.session = ViewerSession::new();
        self.controls_shown = false;
        self.screen = EditorScreen::Preview;
    }

    /// Restarts the preview replay from the first screen.
    pub fn replay_preview(&mut self) {
        self.session.replay();
        self.controls_shown = false;
    }

    /// Enters a theme demo with a fresh session.
    pub fn start_theme_demo(&mut self, theme_id: &str) {
        self.demo_session = ViewerSession::new();
        self.demo_show_all = false;
        self.screen = EditorScreen::ThemeDemo(theme_id.to_string());
    }

    /// Closes the link modal and clears its transient flags.
    pub fn close_link_modal(&mut self) {
        self.link_modal_open = false;
        self.link_copied = false;
        self.publish_error = None;
    }
}

#[cfg(test)]
mod tests {
    use invites_core::Stage;

    use super::*;

    #[test]
    fn start_preview_resets_session_and_controls() {
        let mut state = EditorState::new();
        state.controls_shown = true;
        for _ in 0..5 {
            state.session.advance();
        }

        state.start_preview();
        assert_eq!(state.screen, EditorScreen::Preview);
        assert_eq!(state.session.stage(), Stage::CuriosityHook);
        assert!(!state.controls_shown);
    }

    #[test]
    fn replay_clears_controls() {
        let mut state = EditorState::new();
        state.start_preview();
        for _ in 0..5 {
            state.session.advance();
        }
        state.controls_shown = true;

        state.replay_preview();
        assert_eq!(state.session.stage(), Stage::CuriosityHook);
        assert!(!state.controls_shown);
    }

    #[test]
    fn close_link_modal_clears_transients() {
        let mut state = EditorState::new();
        state.link_modal_open = true;
        state.link_copied = true;
        state.publish_error = Some("boom".to_string());

        state.close_link_modal();
        assert!(!state.link_modal_open);
        assert!(!state.link_copied);
        assert!(state.publish_error.is_none());
    }
}
