//! The screen sequencer shared by the editor preview and the recipient
//! viewer.
//!
//! A viewing session walks an ordered, finite sequence of screens and then
//! branches on the recipient's response. The stage is a single tagged enum:
//! one variant per screen or terminal, so combinations like "confirmed and
//! declined at once" are unrepresentable.

use crate::record::ResponseKind;

/// Number of screens before the response branch, `Options` included.
pub const PRE_BRANCH_SCREENS: usize = 6;

/// Auto-advance delay in the editor preview flow.
pub const PREVIEW_ADVANCE_DELAY_MS: u64 = 3000;

/// Auto-advance delay in the theme-gallery demo flow.
pub const THEME_DEMO_ADVANCE_DELAY_MS: u64 = 2500;

/// One discrete position in the viewing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Screen 1: the curiosity hook (opening line).
    CuriosityHook,
    /// Screen 2: emotional warm-up.
    WarmUp,
    /// Screen 3: personal touch (traits).
    PersonalTouch,
    /// Screen 4: vulnerability line.
    Vulnerability,
    /// Screen 5: the ask (invitation sentence).
    TheAsk,
    /// Screen 6: date details and response controls. Final pre-branch screen.
    Options,
    /// "Yes" was chosen; the follow-up is revealed and a second confirmation
    /// action is awaited.
    FollowUpShown,
    /// Terminal: the yes path, confirmed.
    Confirmed,
    /// Terminal: the maybe path.
    Flexible,
    /// Terminal: the no path.
    Declined,
}

impl Stage {
    /// 1-based screen number for pre-branch screens, `None` once branched.
    pub fn screen_number(&self) -> Option<usize> {
        match self {
            Stage::CuriosityHook => Some(1),
            Stage::WarmUp => Some(2),
            Stage::PersonalTouch => Some(3),
            Stage::Vulnerability => Some(4),
            Stage::TheAsk => Some(5),
            Stage::Options => Some(6),
            _ => None,
        }
    }

    /// Whether a preview timer should advance away from this stage.
    ///
    /// `Options` never auto-advances: it exposes response controls instead.
    pub fn auto_advances(&self) -> bool {
        matches!(
            self,
            Stage::CuriosityHook
                | Stage::WarmUp
                | Stage::PersonalTouch
                | Stage::Vulnerability
                | Stage::TheAsk
        )
    }

    /// Whether no further forward transition is possible except replay.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Confirmed | Stage::Flexible | Stage::Declined)
    }
}

/// Ephemeral per-viewing state. Created on load, never serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSession {
    stage: Stage,
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerSession {
    /// Starts a session at the first screen.
    pub fn new() -> Self {
        Self {
            stage: Stage::CuriosityHook,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The chosen response, derived from the stage. Set at most once per
    /// session; cleared only by [`replay`](Self::replay).
    pub fn response(&self) -> Option<ResponseKind> {
        match self.stage {
            Stage::FollowUpShown | Stage::Confirmed => Some(ResponseKind::Yes),
            Stage::Flexible => Some(ResponseKind::Maybe),
            Stage::Declined => Some(ResponseKind::No),
            _ => None,
        }
    }

    /// Moves to the next pre-branch screen.
    ///
    /// A no-op at `Options` and beyond: extra taps or stale timer ticks are
    /// silently absorbed, never overshoot.
    pub fn advance(&mut self) {
        self.stage = match self.stage {
            Stage::CuriosityHook => Stage::WarmUp,
            Stage::WarmUp => Stage::PersonalTouch,
            Stage::PersonalTouch => Stage::Vulnerability,
            Stage::Vulnerability => Stage::TheAsk,
            Stage::TheAsk => Stage::Options,
            other => other,
        };
    }

    /// Records a response. Valid only at `Options`; ignored elsewhere.
    ///
    /// The affirmative path is two-phase: `Yes` reveals the follow-up and
    /// waits for [`confirm`](Self::confirm). Maybe and no reach their
    /// terminal in one call.
    pub fn choose(&mut self, kind: ResponseKind) {
        if self.stage != Stage::Options {
            return;
        }
        self.stage = match kind {
            ResponseKind::Yes => Stage::FollowUpShown,
            ResponseKind::Maybe => Stage::Flexible,
            ResponseKind::No => Stage::Declined,
        };
    }

    /// Second confirmation action for the yes path. Valid only from
    /// `FollowUpShown`; ignored elsewhere.
    pub fn confirm(&mut self) {
        if self.stage == Stage::FollowUpShown {
            self.stage = Stage::Confirmed;
        }
    }

    /// Resets to the first screen and clears the response.
    pub fn replay(&mut self) {
        self.stage = Stage::CuriosityHook;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_in_order_through_all_screens() {
        let mut session = ViewerSession::new();
        let expected = [
            Stage::CuriosityHook,
            Stage::WarmUp,
            Stage::PersonalTouch,
            Stage::Vulnerability,
            Stage::TheAsk,
            Stage::Options,
        ];

        for (i, stage) in expected.iter().enumerate() {
            assert_eq!(session.stage(), *stage, "screen {}", i + 1);
            session.advance();
        }
    }

    #[test]
    fn advance_saturates_at_options() {
        let mut session = ViewerSession::new();
        for _ in 0..20 {
            session.advance();
        }
        assert_eq!(session.stage(), Stage::Options);
        assert_eq!(session.stage().screen_number(), Some(PRE_BRANCH_SCREENS));
    }

    #[test]
    fn yes_is_two_phase() {
        let mut session = ViewerSession::new();
        for _ in 0..5 {
            session.advance();
        }

        session.choose(ResponseKind::Yes);
        assert_eq!(session.stage(), Stage::FollowUpShown);
        assert!(!session.stage().is_terminal());
        assert_eq!(session.response(), Some(ResponseKind::Yes));

        session.confirm();
        assert_eq!(session.stage(), Stage::Confirmed);
        assert!(session.stage().is_terminal());
    }

    #[test]
    fn maybe_and_no_are_single_phase() {
        for (kind, terminal) in [
            (ResponseKind::Maybe, Stage::Flexible),
            (ResponseKind::No, Stage::Declined),
        ] {
            let mut session = ViewerSession::new();
            for _ in 0..5 {
                session.advance();
            }
            session.choose(kind);
            assert_eq!(session.stage(), terminal);
            assert!(session.stage().is_terminal());
            assert_eq!(session.response(), Some(kind));
        }
    }

    #[test]
    fn choose_before_options_is_ignored() {
        let mut session = ViewerSession::new();
        session.choose(ResponseKind::Yes);
        assert_eq!(session.stage(), Stage::CuriosityHook);
        assert_eq!(session.response(), None);
    }

    #[test]
    fn choose_after_branch_cannot_change_response() {
        let mut session = ViewerSession::new();
        for _ in 0..5 {
            session.advance();
        }
        session.choose(ResponseKind::No);
        session.choose(ResponseKind::Yes);
        assert_eq!(session.stage(), Stage::Declined);
        assert_eq!(session.response(), Some(ResponseKind::No));
    }

    #[test]
    fn confirm_outside_follow_up_is_ignored() {
        let mut session = ViewerSession::new();
        session.confirm();
        assert_eq!(session.stage(), Stage::CuriosityHook);

        for _ in 0..5 {
            session.advance();
        }
        session.choose(ResponseKind::Maybe);
        session.confirm();
        assert_eq!(session.stage(), Stage::Flexible);
    }

    #[test]
    fn advance_is_ignored_after_branching() {
        let mut session = ViewerSession::new();
        for _ in 0..5 {
            session.advance();
        }
        session.choose(ResponseKind::Yes);
        // A stale timer tick must not move a branched session.
        session.advance();
        assert_eq!(session.stage(), Stage::FollowUpShown);
    }

    #[test]
    fn replay_resets_from_any_terminal() {
        for kind in ResponseKind::all() {
            let mut session = ViewerSession::new();
            for _ in 0..5 {
                session.advance();
            }
            session.choose(kind);
            if kind == ResponseKind::Yes {
                session.confirm();
            }
            assert!(session.stage().is_terminal());

            session.replay();
            assert_eq!(session.stage(), Stage::CuriosityHook);
            assert_eq!(session.response(), None);
        }
    }

    #[test]
    fn options_does_not_auto_advance() {
        let mut session = ViewerSession::new();
        for _ in 0..5 {
            session.advance();
        }
        assert!(!session.stage().auto_advances());
    }
}
