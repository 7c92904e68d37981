//! Derived share surfaces for an invitation record: calendar export, deep
//! links, and the background-media reference.
//!
//! Everything here is derived from a record at display time; nothing is
//! stored.

pub mod calendar;
pub mod links;
pub mod media;

pub use calendar::CalendarEvent;
pub use links::{
    mailto_link, parse_invite_key, sms_link, whatsapp_link, SHARE_SENTENCE, SHARE_SUBJECT,
};
pub use media::{embed_url, video_id};
