//! State management for the viewer.

use invites_core::{sample_record, InvitationRecord, ViewerSession};

/// Main state for a viewing.
#[derive(Debug, Clone)]
pub struct ViewerAppState {
    /// The record being replayed. Starts as the built-in sample and is
    /// replaced once the store lookup finishes.
    pub record: InvitationRecord,
    /// Whether the store lookup is still in flight.
    pub loading: bool,
    /// The screen sequencer.
    pub session: ViewerSession,
    /// Whether the background music side-channel is playing.
    pub music_playing: bool,
    /// Free-text reply typed on a terminal screen.
    pub reply_draft: String,
    /// Whether the reply was "sent". View-only: replies are not persisted
    /// anywhere, which is a known gap inherited from the original flow.
    pub reply_sent: bool,
}

impl Default for ViewerAppState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerAppState {
    pub fn new() -> Self {
        Self {
            record: sample_record(),
            loading: true,
            session: ViewerSession::new(),
            music_playing: false,
            reply_draft: String::new(),
            reply_sent: false,
        }
    }

    /// Restarts the replay, clearing the response and any reply text.
    ///
    /// The music side-channel is left alone: it lives outside the screen
    /// sequence.
    pub fn replay(&mut self) {
        self.session.replay();
        self.reply_draft.clear();
        self.reply_sent = false;
    }
}

#[cfg(test)]
mod tests {
    use invites_core::{ResponseKind, Stage};

    use super::*;

    #[test]
    fn new_state_starts_on_sample_record() {
        let state = ViewerAppState::new();
        assert_eq!(state.record, sample_record());
        assert_eq!(state.session.stage(), Stage::CuriosityHook);
        assert!(state.loading);
    }

    #[test]
    fn replay_clears_response_and_reply_but_not_music() {
        let mut state = ViewerAppState::new();
        for _ in 0..5 {
            state.session.advance();
        }
        state.session.choose(ResponseKind::Maybe);
        state.reply_draft = "see you there".to_string();
        state.reply_sent = true;
        state.music_playing = true;

        state.replay();
        assert_eq!(state.session.stage(), Stage::CuriosityHook);
        assert!(state.reply_draft.is_empty());
        assert!(!state.reply_sent);
        assert!(state.music_playing);
    }
}
