//! Error types for Western date-time parsing and validation.

/// Errors from date-string parsing or strict component validation.
///
/// The numeric conversions in [`crate::julian`] never fail; these errors only
/// come from [`crate::parse_julian`] and [`crate::validate_western`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input did not contain 8, 14 or 17 digits.
    #[error("cannot parse date-time from {input:?}: expected 8, 14 or 17 digits, found {digits}")]
    Parse {
        /// The original input string.
        input: String,
        /// Number of digits found in the input.
        digits: usize,
    },

    /// Month outside 1..=12.
    #[error("month must be in 1..=12, got {month}")]
    InvalidMonth {
        /// The rejected month.
        month: i32,
    },

    /// Day outside the length of its month.
    #[error("day {day} is out of range for {year}-{month:02} ({max} days)")]
    InvalidDay {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: i32,
        /// The rejected day.
        day: i32,
        /// Length of the month under the active calendar.
        max: i32,
    },

    /// Hour, minute or second outside the clock range.
    #[error("time {hour}:{minute}:{second} is out of range")]
    InvalidTime {
        /// Rejected hour.
        hour: i32,
        /// Rejected minute.
        minute: i32,
        /// Rejected second.
        second: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = TimeError::Parse {
            input: "2024-1".into(),
            digits: 5,
        };
        assert!(e.to_string().contains("found 5"));
        assert_eq!(
            TimeError::InvalidMonth { month: 13 }.to_string(),
            "month must be in 1..=12, got 13"
        );
        let e = TimeError::InvalidDay {
            year: 2023,
            month: 2,
            day: 29,
            max: 28,
        };
        assert_eq!(e.to_string(), "day 29 is out of range for 2023-02 (28 days)");
    }

    #[test]
    fn is_send_sync_error() {
        fn assert_traits<T: Send + Sync + std::error::Error>() {}
        assert_traits::<TimeError>();
    }
}
