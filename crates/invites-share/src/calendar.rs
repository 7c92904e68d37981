//! Calendar export for an invitation's date details.

use chrono::{Duration, NaiveDateTime};
use invites_core::InvitationRecord;
use url::Url;

/// How long a date is assumed to run.
const EVENT_DURATION_HOURS: i64 = 2;

/// Timestamp format used by both the provider URL and the ICS document.
const CALENDAR_STAMP: &str = "%Y%m%dT%H%M%S";

/// A calendar event derived from a record. Not stored anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub summary: String,
    pub description: String,
    pub location: String,
}

impl CalendarEvent {
    /// Derives the event: start = date + time, end = start + 2 hours.
    pub fn from_record(record: &InvitationRecord) -> Self {
        let start = record.date.and_time(record.time);
        Self {
            start,
            end: start + Duration::hours(EVENT_DURATION_HOURS),
            summary: record.invitation_sentence.clone(),
            description: record.response_options.yes.follow_up.clone(),
            location: record.location.clone(),
        }
    }

    /// Google Calendar event-creation URL.
    pub fn google_calendar_url(&self) -> String {
        let dates = format!(
            "{}/{}",
            self.start.format(CALENDAR_STAMP),
            self.end.format(CALENDAR_STAMP)
        );

        let mut url = Url::parse("https://calendar.google.com/calendar/render")
            .expect("static URL parses");
        url.query_pairs_mut()
            .append_pair("action", "TEMPLATE")
            .append_pair("text", &self.summary)
            .append_pair("dates", &dates)
            .append_pair("details", &self.description)
            .append_pair("location", &self.location);
        url.to_string()
    }

    /// Standalone calendar-event document, offered as a downloadable file.
    pub fn to_ics(&self) -> String {
        let mut lines = vec![
            "BEGIN:VCALENDAR".to_string(),
            "VERSION:2.0".to_string(),
            "PRODID:-//Love Invites//EN".to_string(),
            "BEGIN:VEVENT".to_string(),
            format!("DTSTART:{}", self.start.format(CALENDAR_STAMP)),
            format!("DTEND:{}", self.end.format(CALENDAR_STAMP)),
            format!("SUMMARY:{}", ics_escape(&self.summary)),
            format!("DESCRIPTION:{}", ics_escape(&self.description)),
            format!("LOCATION:{}", ics_escape(&self.location)),
            "END:VEVENT".to_string(),
            "END:VCALENDAR".to_string(),
        ];
        lines.push(String::new());
        lines.join("\r\n")
    }
}

/// Escapes text per RFC 5545: backslash, comma, semicolon, newline.
fn ics_escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use invites_core::sample_record;

    use super::*;

    #[test]
    fn end_is_exactly_two_hours_after_start() {
        let record = sample_record();
        let event = CalendarEvent::from_record(&record);

        assert_eq!(
            event.start,
            NaiveDate::from_ymd_opt(2026, 2, 14)
                .unwrap()
                .and_time(NaiveTime::from_hms_opt(19, 30, 0).unwrap())
        );
        assert_eq!(
            event.end,
            NaiveDate::from_ymd_opt(2026, 2, 14)
                .unwrap()
                .and_time(NaiveTime::from_hms_opt(21, 30, 0).unwrap())
        );
    }

    #[test]
    fn google_url_encodes_date_range() {
        let event = CalendarEvent::from_record(&sample_record());
        let url = event.google_calendar_url();

        assert!(url.starts_with("https://calendar.google.com/calendar/render?"));
        assert!(url.contains("action=TEMPLATE"));
        assert!(url.contains("20260214T193000%2F20260214T213000"));
    }

    #[test]
    fn ics_has_fixed_fields() {
        let event = CalendarEvent::from_record(&sample_record());
        let ics = event.to_ics();

        assert!(ics.starts_with("BEGIN:VCALENDAR"));
        assert!(ics.contains("DTSTART:20260214T193000"));
        assert!(ics.contains("DTEND:20260214T213000"));
        assert!(ics.contains("SUMMARY:Would you like to go on a date with me?"));
        assert!(ics.contains("LOCATION:Carbone Restaurant"));
        assert!(ics.contains("END:VEVENT"));
    }

    #[test]
    fn ics_escapes_separators() {
        let mut record = sample_record();
        record.location = "Cafe Luna, 5th Ave; rooftop".to_string();

        let ics = CalendarEvent::from_record(&record).to_ics();
        assert!(ics.contains("LOCATION:Cafe Luna\\, 5th Ave\\; rooftop"));
    }
}
