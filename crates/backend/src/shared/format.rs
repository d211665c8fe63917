use chrono::NaiveDate;

/// Formats a number with dot thousands separators
///
/// # Examples
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Display form of a sale date: "Mar 05, 2024". Presentation only, never compared.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Download file stem of a report title: lowercase, whitespace runs become `-`
///
/// ```
/// use backend::shared::format::file_slug;
/// assert_eq!(file_slug("Sales Report Jan 01, 2024"), "sales-report-jan-01,-2024");
/// ```
pub fn file_slug(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234), "1.234");
        assert_eq!(format_number(1234567), "1.234.567");
        assert_eq!(format_number(1234567890), "1.234.567.890");
    }

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_display_date(date), "Mar 05, 2024");
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(format_display_date(date), "Dec 31, 2023");
    }

    #[test]
    fn test_file_slug() {
        assert_eq!(
            file_slug("Sales Report Mar 01, 2024 - Mar 31, 2024"),
            "sales-report-mar-01,-2024---mar-31,-2024"
        );
        assert_eq!(file_slug("  Forecast   Report "), "forecast-report");
    }
}
