//! Recipient viewer for Love Invites.
//!
//! A Dioxus desktop application that loads one invitation record by key and
//! replays it as a tap-advanced screen sequence, branching into the response
//! flow at the end.

pub mod components;
pub mod state;
