/// Utilities for date and time formatting
///
/// The backend emits naive ISO timestamps (`2024-03-15T14:02:26.123456`),
/// sometimes with an offset. Everything is shown as `YYYY-MM-DD HH:MM:SS`.
use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format ISO datetime string for tables.
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.naive_local().format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = datetime_str.parse::<NaiveDateTime>() {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    datetime_str.to_string()
}

/// Optional timestamps render as a dash
pub fn format_optional_datetime(value: Option<&str>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "2024-03-15 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59.654321"),
            "2024-12-31 23:59:59"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59+08:00"),
            "2024-12-31 23:59:59"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_optional_datetime(None), "—");
    }
}
