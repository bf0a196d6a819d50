//! Error types for ccperiod
//!
//! All errors derive from `thiserror`. Configuration fallbacks (invalid
//! timezone, missing custom anchor) are deliberately *not* errors; they are
//! reported as [`crate::config::ConfigFallback`] values so callers can
//! observe degraded configuration without a failed construction.

use thiserror::Error;

/// Main error type for ccperiod operations
#[derive(Error, Debug)]
pub enum CcperiodError {
    /// Period type string not recognized at configuration time
    #[error("Unknown period type: {0}")]
    UnknownPeriodType(String),

    /// Reset offset outside the valid range for the period type
    #[error("Invalid reset offset for {period_type} periods: {offset}")]
    InvalidResetOffset {
        /// Period type the offset was configured for
        period_type: String,
        /// The rejected offset value
        offset: i64,
    },

    /// Anchor date string could not be parsed
    #[error("Invalid anchor date: {0}")]
    InvalidAnchor(String),

    /// Invalid timezone name (strict parse path only)
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// A local wall-clock time could not be resolved in the configured zone
    #[error("Invalid local time: {0}")]
    InvalidDate(String),

    /// The same batch was added to a summary more than once
    #[error("Batch already aggregated: {0}")]
    DuplicateBatch(String),
}

/// Convenience type alias for Results in ccperiod
pub type Result<T> = std::result::Result<T, CcperiodError>;
