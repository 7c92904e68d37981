//! Core data model and screen sequencing for Love Invites.
//!
//! This crate is pure logic: the invitation record and draft types, the
//! screen sequencer driven by both the editor preview and the recipient
//! viewer, and the built-in sample content. No I/O, no UI.

pub mod draft;
pub mod error;
pub mod record;
pub mod session;

pub use draft::{
    InvitationDraft, AnimationSpeed, DateType, INVITATION_EXAMPLES, LOCATION_EXAMPLES,
    OPENING_LINE_EXAMPLES, TRAITS_EXAMPLES, VULNERABILITY_EXAMPLES,
};
pub use error::DraftError;
pub use record::{
    sample_record, BackgroundTheme, InvitationRecord, ResponseKind, ResponseOption,
    ResponseOptions, Tone, SAMPLE_OPENING_LINE,
};
pub use session::{
    Stage, ViewerSession, PREVIEW_ADVANCE_DELAY_MS, PRE_BRANCH_SCREENS,
    THEME_DEMO_ADVANCE_DELAY_MS,
};
