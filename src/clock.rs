//! Browser clock helpers.

use chrono::{NaiveDate, NaiveDateTime};

use crate::storage;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Parses the `YYYY-MM-DD` value of an `<input type="date">`
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn date_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Timestamp in the date and clock formats chosen on the Settings page
pub fn stamp(at: Option<NaiveDateTime>) -> String {
    storage::load_system_preferences().format_timestamp(at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_input_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(date_input_value(date), "2024-03-09");
        assert_eq!(parse_date_input(" 2024-03-09 "), Some(date));
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("09/03/2024"), None);
    }
}
