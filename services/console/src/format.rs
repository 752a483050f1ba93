//! Pure display formatters for timestamps, durations, and request rows

use chrono::{DateTime, Local};
use std::fmt;

/// Render an absolute instant as `DD/MM/YYYY HH:MM:SS` in the caller's
/// local timezone
pub fn format_timestamp(instant: &DateTime<Local>) -> String {
    instant.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Render a millisecond duration with two decimal places, scaling to
/// seconds at 1000ms and to minutes at 60000ms (boundary values fall into
/// the larger unit)
pub fn format_duration(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{ms:.2}ms")
    } else if ms < 60_000.0 {
        format!("{:.2}s", ms / 1000.0)
    } else {
        format!("{:.2}min", ms / 60_000.0)
    }
}

/// Display classification of an HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    Error,
    Pending,
}

impl StatusClass {
    /// CSS class name for the status cell
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Success => "status-success",
            StatusClass::Error => "status-error",
            StatusClass::Pending => "status-pending",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a status code for display. 2xx is success, >= 400 is error,
/// and everything else (3xx redirects, but also negative or otherwise
/// out-of-range values) is pending.
pub fn status_class(code: i32) -> StatusClass {
    if (200..300).contains(&code) {
        StatusClass::Success
    } else if code >= 400 {
        StatusClass::Error
    } else {
        StatusClass::Pending
    }
}

/// CSS class name for an HTTP method cell. The method is not validated
/// against the known verbs.
pub fn method_class(method: &str) -> String {
    format!("method-{}", method.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_is_day_month_year_with_seconds() {
        let instant = Local.with_ymd_and_hms(2024, 1, 5, 14, 30, 25).unwrap();
        assert_eq!(format_timestamp(&instant), "05/01/2024 14:30:25");
    }

    #[test]
    fn timestamp_uses_24_hour_clock() {
        let instant = Local.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_timestamp(&instant), "31/12/2024 23:59:59");
    }

    #[test]
    fn duration_below_one_second_is_milliseconds() {
        assert_eq!(format_duration(0.0), "0.00ms");
        assert_eq!(format_duration(45.2), "45.20ms");
        assert_eq!(format_duration(999.99), "999.99ms");
    }

    #[test]
    fn duration_boundary_values_take_the_larger_unit() {
        assert_eq!(format_duration(1000.0), "1.00s");
        assert_eq!(format_duration(60_000.0), "1.00min");
    }

    #[test]
    fn duration_below_one_minute_is_seconds() {
        assert_eq!(format_duration(1500.0), "1.50s");
        assert_eq!(format_duration(59_999.0), "60.00s");
    }

    #[test]
    fn duration_above_one_minute_is_minutes() {
        assert_eq!(format_duration(90_000.0), "1.50min");
        assert_eq!(format_duration(3_600_000.0), "60.00min");
    }

    #[test]
    fn status_2xx_is_success() {
        assert_eq!(status_class(200), StatusClass::Success);
        assert_eq!(status_class(204), StatusClass::Success);
        assert_eq!(status_class(299), StatusClass::Success);
    }

    #[test]
    fn status_4xx_and_5xx_are_error() {
        assert_eq!(status_class(400), StatusClass::Error);
        assert_eq!(status_class(404), StatusClass::Error);
        assert_eq!(status_class(500), StatusClass::Error);
    }

    #[test]
    fn status_redirects_are_pending() {
        assert_eq!(status_class(300), StatusClass::Pending);
        assert_eq!(status_class(301), StatusClass::Pending);
        assert_eq!(status_class(399), StatusClass::Pending);
    }

    #[test]
    fn status_out_of_range_values_are_pending() {
        assert_eq!(status_class(150), StatusClass::Pending);
        assert_eq!(status_class(0), StatusClass::Pending);
        assert_eq!(status_class(-1), StatusClass::Pending);
    }

    #[test]
    fn status_class_css_names() {
        assert_eq!(status_class(200).as_str(), "status-success");
        assert_eq!(status_class(500).as_str(), "status-error");
        assert_eq!(status_class(302).to_string(), "status-pending");
    }

    #[test]
    fn method_class_lowercases() {
        assert_eq!(method_class("GET"), "method-get");
        assert_eq!(method_class("Post"), "method-post");
        assert_eq!(method_class("delete"), "method-delete");
    }
}
