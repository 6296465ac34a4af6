/// Utilities for calendar dates shown in the UI

use chrono::{Local, NaiveDate};

/// Today in the browser's local time zone; default for every date field.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date for tables and headers.
/// Example: 2024-03-15 -> "Mar 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "Mar 5, 2024");
    }
}
