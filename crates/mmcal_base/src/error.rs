//! Error types for strict Myanmar date validation.

/// Errors from [`crate::validate_myanmar`].
///
/// The conversions themselves accept any input; only the opt-in validation
/// reports these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Month code outside 0..=14.
    #[error("Myanmar month code must be in 0..=14, got {month}")]
    InvalidMonth {
        /// The rejected month code.
        month: i32,
    },

    /// First Waso requested in a year without an intercalary month.
    #[error("Myanmar year {year} has no First Waso")]
    InvalidWatatMonth {
        /// The common year.
        year: i32,
    },

    /// Day outside the month (or a late month the year does not reach).
    #[error("day {day} is out of range for month {month} of {year} ({max} days)")]
    InvalidDay {
        /// Year of the rejected date.
        year: i32,
        /// Month code of the rejected date.
        month: i32,
        /// The rejected day.
        day: i32,
        /// Days available in that month.
        max: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            CalendarError::InvalidWatatMonth { year: 1386 }.to_string(),
            "Myanmar year 1386 has no First Waso"
        );
        let e = CalendarError::InvalidDay {
            year: 1386,
            month: 1,
            day: 30,
            max: 29,
        };
        assert_eq!(e.to_string(), "day 30 is out of range for month 1 of 1386 (29 days)");
    }

    #[test]
    fn is_send_sync_error() {
        fn assert_traits<T: Send + Sync + std::error::Error>() {}
        assert_traits::<CalendarError>();
    }
}
