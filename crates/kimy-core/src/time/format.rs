//! Pure timestamp formatting.
//!
//! Renders dates the way the chat header does: "Hoy", "Ayer", or a Spanish
//! "day month" string, plus a 12-hour clock for individual messages. Both
//! functions are deterministic given their inputs; "now" is always passed in.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Spanish month names indexed by `month0`.
const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// "Hoy", "Ayer", or "{day:02} de {month}" relative to `now`.
pub fn format_date<Tz: TimeZone>(ts: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let date = ts.date_naive();
    let today = now.date_naive();

    if date == today {
        return "Hoy".to_string();
    }
    if Some(date) == today.pred_opt() {
        return "Ayer".to_string();
    }
    format!("{:02} de {}", date.day(), MONTHS[date.month0() as usize])
}

/// 12-hour "H:MM AM/PM" with zero-padded minutes.
pub fn format_time<Tz: TimeZone>(ts: &DateTime<Tz>) -> String {
    let (is_pm, hour) = ts.hour12();
    let suffix = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, ts.minute(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_format_date_today() {
        let now = at(2024, 8, 5, 18, 0);
        assert_eq!(format_date(&at(2024, 8, 5, 9, 30), &now), "Hoy");
    }

    #[test]
    fn test_format_date_yesterday() {
        let now = at(2024, 8, 5, 0, 10);
        assert_eq!(format_date(&at(2024, 8, 4, 23, 59), &now), "Ayer");
    }

    #[test]
    fn test_format_date_yesterday_across_month_boundary() {
        let now = at(2024, 9, 1, 12, 0);
        assert_eq!(format_date(&at(2024, 8, 31, 12, 0), &now), "Ayer");
    }

    #[test]
    fn test_format_date_older_uses_spanish_month() {
        let now = at(2024, 8, 5, 12, 0);
        assert_eq!(format_date(&at(2024, 3, 5, 12, 0), &now), "05 de marzo");
        assert_eq!(format_date(&at(2023, 12, 24, 12, 0), &now), "24 de diciembre");
    }

    #[test]
    fn test_format_time_pads_minutes() {
        assert_eq!(format_time(&at(2024, 8, 5, 13, 5)), "1:05 PM");
        assert_eq!(format_time(&at(2024, 8, 5, 9, 30)), "9:30 AM");
    }

    #[test]
    fn test_format_time_midnight_and_noon() {
        assert_eq!(format_time(&at(2024, 8, 5, 0, 0)), "12:00 AM");
        assert_eq!(format_time(&at(2024, 8, 5, 12, 0)), "12:00 PM");
    }

    #[test]
    fn test_format_is_pure() {
        let ts = at(2024, 8, 5, 13, 5);
        let now = at(2024, 8, 6, 0, 0);
        assert_eq!(format_date(&ts, &now), format_date(&ts, &now));
        assert_eq!(format_time(&ts), format_time(&ts));
    }
}
