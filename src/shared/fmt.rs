//! Fixed-locale formatting for dates and timestamps.
//!
//! The tracker runs in a single locale: dates print as `dd/mm/yyyy` on
//! documents and as ISO `yyyy-mm-dd` in export file names. No locale
//! negotiation happens anywhere in the core.

use chrono::{NaiveDate, NaiveDateTime};

/// Document display form, `dd/mm/yyyy`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Generation-timestamp line form, `dd/mm/yyyy HH:MM`.
pub fn display_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%d/%m/%Y %H:%M").to_string()
}

/// ISO date used in export file names, `yyyy-mm-dd`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(display_date(d), "07/03/2025");
    }

    #[test]
    fn test_display_timestamp() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        assert_eq!(display_timestamp(d), "07/03/2025 14:05");
    }

    #[test]
    fn test_iso_date() {
        let d = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(iso_date(d), "2025-12-31");
    }
}
