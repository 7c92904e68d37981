//! Authoring wizard and preview for Love Invites.
//!
//! A Dioxus desktop application: a four-step form collects the invitation
//! draft, a timed preview replays it exactly as the recipient will see it,
//! and the link modal publishes the record to the local content store.

pub mod components;
pub mod state;
