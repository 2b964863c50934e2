//! Error type for the strict constructors.

use mmcal_base::CalendarError;
use mmcal_time::TimeError;

/// Errors from [`crate::MyanmarDateTime::try_from_western`],
/// [`crate::MyanmarDateTime::try_from_myanmar`] and
/// [`crate::MyanmarDateTime::parse`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MmcalError {
    /// Western date-time parsing or validation failed.
    #[error(transparent)]
    Time(#[from] TimeError),

    /// Myanmar date validation failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_layers() {
        let e: MmcalError = TimeError::InvalidMonth { month: 13 }.into();
        assert_eq!(e.to_string(), "month must be in 1..=12, got 13");
        let e: MmcalError = CalendarError::InvalidWatatMonth { year: 1386 }.into();
        assert!(matches!(e, MmcalError::Calendar(_)));
        assert_eq!(e.to_string(), "Myanmar year 1386 has no First Waso");
    }

    #[test]
    fn is_send_sync_error() {
        fn assert_traits<T: Send + Sync + std::error::Error>() {}
        assert_traits::<MmcalError>();
    }
}
