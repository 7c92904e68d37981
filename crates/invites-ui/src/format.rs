//! Display formatting for date details.

use chrono::{NaiveDate, NaiveTime};

/// Long-form date, e.g. "Saturday, February 14, 2026".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// 12-hour clock time, e.g. "7:30 PM".
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        assert_eq!(format_date(date), "Saturday, February 14, 2026");
    }

    #[test]
    fn formats_twelve_hour_time() {
        assert_eq!(
            format_time(NaiveTime::from_hms_opt(19, 30, 0).unwrap()),
            "7:30 PM"
        );
        assert_eq!(
            format_time(NaiveTime::from_hms_opt(0, 5, 0).unwrap()),
            "12:05 AM"
        );
        assert_eq!(
            format_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
            "12:00 PM"
        );
    }
}
