//! Reset countdown queries on resolved periods
//!
//! Pure value-object counterparts to the calculator's reset methods: they
//! derive countdown metadata from a `Period` the caller already holds,
//! without re-resolving boundaries. If `now` has passed the period's end,
//! `time_until_reset` goes negative; re-resolving the period is the
//! caller's job.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use crate::types::Period;

/// The next reset instant for a period (its end boundary)
pub fn next_reset(period: &Period) -> DateTime<Tz> {
    period.end
}

/// Time remaining until the period's reset, measured from `now`
///
/// Negative once `now` is at or past the end boundary.
pub fn time_until_reset(period: &Period, now: DateTime<Utc>) -> Duration {
    period.end.signed_duration_since(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PeriodType;
    use chrono::TimeZone;

    fn daily_period() -> Period {
        let start = Tz::UTC.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let end = Tz::UTC.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap();
        Period::new(PeriodType::Daily, start, end, true)
    }

    #[test]
    fn test_next_reset_is_period_end() {
        let period = daily_period();
        assert_eq!(next_reset(&period), period.end);
    }

    #[test]
    fn test_time_until_reset_mid_period() {
        let period = daily_period();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
        assert_eq!(
            time_until_reset(&period, now),
            Duration::hours(9) + Duration::minutes(30)
        );
    }

    #[test]
    fn test_time_until_reset_goes_negative_past_end() {
        let period = daily_period();
        let now = Utc.with_ymd_and_hms(2024, 1, 16, 1, 0, 0).unwrap();
        assert_eq!(time_until_reset(&period, now), Duration::hours(-1));
    }
}
