//! Date display formatting.

use chrono::NaiveDate;

/// Format a date as `"Apr 12, 2025"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(format_date(date(2025, 4, 12)), "Apr 12, 2025");
        assert_eq!(format_date(date(2024, 2, 29)), "Feb 29, 2024");
        assert_eq!(format_date(date(2030, 12, 1)), "Dec 1, 2030");
    }
}
