//! Billing-period boundary calculation
//!
//! The calculator maps a reference instant to the half-open interval
//! `[start, end)` of the enclosing billing period, according to the
//! configured [`PeriodRule`]. All boundary math happens in wall-clock time
//! in the configured timezone; the returned boundaries carry that zone.
//!
//! # Examples
//! ```
//! use ccperiod::calculator::PeriodCalculator;
//! use ccperiod::config::{CalculatorConfig, PeriodRule};
//! use ccperiod::timezone::TimezoneConfig;
//! use chrono::{TimeZone, Utc};
//!
//! let config = CalculatorConfig::new(
//!     PeriodRule::daily(0).unwrap(),
//!     TimezoneConfig::parse("UTC").unwrap(),
//! );
//! let calculator = PeriodCalculator::new(config);
//!
//! let reference = Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
//! let (start, end) = calculator.boundaries(reference).unwrap();
//! assert_eq!(start.to_string(), "2024-01-15 00:00:00 UTC");
//! assert_eq!(end.to_string(), "2024-01-16 00:00:00 UTC");
//! ```

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

use crate::clock::{Clock, SystemClock};
use crate::config::{CalculatorConfig, PeriodRule};
use crate::error::{CcperiodError, Result};
use crate::timezone::{local_midnight, localize};
use crate::types::{Period, PeriodType};

/// Length of one custom billing window, in seconds
const CUSTOM_PERIOD_SECONDS: i64 = 30 * 24 * 3600;

/// Calculates billing period boundaries for a fixed configuration
///
/// Immutable after construction; safe to share across threads for
/// read-only use. The clock is only consulted for `is_current` snapshots
/// and the convenience methods that default the reference instant to now.
pub struct PeriodCalculator<C: Clock = SystemClock> {
    rule: PeriodRule,
    tz: Tz,
    clock: C,
}

impl PeriodCalculator<SystemClock> {
    /// Create a calculator reading the system clock
    pub fn new(config: CalculatorConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> PeriodCalculator<C> {
    /// Create a calculator with an explicit clock
    pub fn with_clock(config: CalculatorConfig, clock: C) -> Self {
        Self {
            rule: config.rule,
            tz: config.timezone.tz,
            clock,
        }
    }

    /// The configured boundary rule
    pub fn rule(&self) -> &PeriodRule {
        &self.rule
    }

    /// The configured timezone
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// The period type this calculator produces
    pub fn period_type(&self) -> PeriodType {
        self.rule.period_type()
    }

    /// Compute the `[start, end)` boundaries of the period containing
    /// `reference`
    pub fn boundaries(&self, reference: DateTime<Utc>) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        let local_ref = reference.with_timezone(&self.tz);
        match self.rule {
            PeriodRule::Daily { reset_hour } => self.daily_boundaries(local_ref, reset_hour),
            PeriodRule::Weekly { reset_weekday } => {
                self.weekly_boundaries(local_ref, reset_weekday)
            }
            PeriodRule::Monthly { reset_day } => self.monthly_boundaries(local_ref, reset_day),
            PeriodRule::Custom { anchor } => self.custom_boundaries(reference, anchor),
        }
    }

    /// The period containing `timestamp`
    ///
    /// `is_current` reflects whether the period contains "now" at call
    /// time, not whether it contains `timestamp`.
    pub fn period_for_timestamp(&self, timestamp: DateTime<Utc>) -> Result<Period> {
        let (start, end) = self.boundaries(timestamp)?;
        let now = self.clock.now();
        let is_current = start <= now && now < end;
        Ok(Period::new(self.period_type(), start, end, is_current))
    }

    /// The current billing period
    pub fn current_period(&self) -> Result<Period> {
        self.current_period_at(self.clock.now())
    }

    /// The billing period containing `reference`, marked current
    pub fn current_period_at(&self, reference: DateTime<Utc>) -> Result<Period> {
        let (start, end) = self.boundaries(reference)?;
        Ok(Period::new(self.period_type(), start, end, true))
    }

    /// The `count` most recent periods ending at the current period,
    /// most recent first
    pub fn recent_periods(&self, count: usize) -> Result<Vec<Period>> {
        self.recent_periods_at(count, self.clock.now())
    }

    /// The `count` most recent periods ending at the period containing
    /// `reference`, most recent first
    ///
    /// Each step re-derives boundaries from one second before the previous
    /// period's start, so consecutive periods never overlap or gap even
    /// across variable month lengths and DST shifts. Only the first
    /// returned period can be current.
    pub fn recent_periods_at(&self, count: usize, reference: DateTime<Utc>) -> Result<Vec<Period>> {
        let mut periods = Vec::with_capacity(count);
        let mut current_ref = reference;

        for _ in 0..count {
            let period = self.period_for_timestamp(current_ref)?;
            current_ref = period.start.with_timezone(&Utc) - Duration::seconds(1);
            periods.push(period);
        }

        Ok(periods)
    }

    /// The next reset instant (end of the current period)
    pub fn next_reset(&self) -> Result<DateTime<Tz>> {
        self.next_reset_at(self.clock.now())
    }

    /// The next reset instant relative to `reference`
    pub fn next_reset_at(&self, reference: DateTime<Utc>) -> Result<DateTime<Tz>> {
        Ok(self.current_period_at(reference)?.end)
    }

    /// Time remaining until the next reset
    pub fn time_until_reset(&self) -> Result<Duration> {
        self.time_until_reset_at(self.clock.now())
    }

    /// Time remaining until the reset following `reference`
    pub fn time_until_reset_at(&self, reference: DateTime<Utc>) -> Result<Duration> {
        let next_reset = self.next_reset_at(reference)?;
        Ok(next_reset.signed_duration_since(reference))
    }

    fn daily_boundaries(
        &self,
        local_ref: DateTime<Tz>,
        reset_hour: u32,
    ) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        let date = local_ref.date_naive();

        let start = if reset_hour == 0 {
            local_midnight(date, self.tz)?
        } else {
            let naive_reset = date.and_hms_opt(reset_hour, 0, 0).ok_or_else(|| {
                CcperiodError::InvalidDate(format!("invalid reset hour {reset_hour}"))
            })?;
            let reset_today = localize(naive_reset, self.tz)?;
            if local_ref < reset_today {
                reset_today - Duration::days(1)
            } else {
                reset_today
            }
        };

        Ok((start, start + Duration::days(1)))
    }

    fn weekly_boundaries(
        &self,
        local_ref: DateTime<Tz>,
        reset_weekday: Weekday,
    ) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        let days_since_reset = (local_ref.weekday().num_days_from_monday() + 7
            - reset_weekday.num_days_from_monday())
            % 7;
        let start_date = local_ref
            .date_naive()
            .checked_sub_days(chrono::Days::new(days_since_reset as u64))
            .ok_or_else(|| {
                CcperiodError::InvalidDate(format!("date underflow at {}", local_ref.date_naive()))
            })?;
        let start = local_midnight(start_date, self.tz)?;

        Ok((start, start + Duration::days(7)))
    }

    fn monthly_boundaries(
        &self,
        local_ref: DateTime<Tz>,
        reset_day: u32,
    ) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        let (year, month) = (local_ref.year(), local_ref.month());
        let actual_reset_day = reset_day.min(days_in_month(year, month)?);

        // Before this month's (clamped) reset day, the period started at
        // last month's reset.
        let start_date = if local_ref.day() < actual_reset_day {
            let (prev_year, prev_month) = if month == 1 {
                (year - 1, 12)
            } else {
                (year, month - 1)
            };
            let prev_reset_day = reset_day.min(days_in_month(prev_year, prev_month)?);
            ymd(prev_year, prev_month, prev_reset_day)?
        } else {
            ymd(year, month, actual_reset_day)?
        };
        let start = local_midnight(start_date, self.tz)?;

        // The end re-applies the configured reset day, clamped to the month
        // after the start month (not the already-clamped start day).
        let (next_year, next_month) = if start_date.month() == 12 {
            (start_date.year() + 1, 1)
        } else {
            (start_date.year(), start_date.month() + 1)
        };
        let next_reset_day = reset_day.min(days_in_month(next_year, next_month)?);
        let end = local_midnight(ymd(next_year, next_month, next_reset_day)?, self.tz)?;

        Ok((start, end))
    }

    fn custom_boundaries(
        &self,
        reference: DateTime<Utc>,
        anchor: DateTime<Utc>,
    ) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        let elapsed_seconds = reference.signed_duration_since(anchor).num_seconds();
        // Floor division so references before the anchor land in
        // negative-index windows that still contain them.
        let mut periods_elapsed = elapsed_seconds.div_euclid(CUSTOM_PERIOD_SECONDS);

        let mut start = anchor + Duration::seconds(periods_elapsed * CUSTOM_PERIOD_SECONDS);
        // num_seconds truncates sub-second components toward zero, which
        // lands one window too high for references a fraction of a second
        // below a window boundary.
        if reference < start {
            periods_elapsed -= 1;
            start = anchor + Duration::seconds(periods_elapsed * CUSTOM_PERIOD_SECONDS);
        }
        let end = start + Duration::seconds(CUSTOM_PERIOD_SECONDS);

        Ok((start.with_timezone(&self.tz), end.with_timezone(&self.tz)))
    }
}

fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = ymd(year, month, 1)?;
    let next = if month == 12 {
        ymd(year + 1, 1, 1)?
    } else {
        ymd(year, month + 1, 1)?
    };
    Ok(next.signed_duration_since(first).num_days() as u32)
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| CcperiodError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::timezone::TimezoneConfig;
    use chrono::TimeZone;

    fn utc_calculator(rule: PeriodRule) -> PeriodCalculator {
        PeriodCalculator::new(CalculatorConfig::new(
            rule,
            TimezoneConfig::parse("UTC").unwrap(),
        ))
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_daily_boundaries_midnight() {
        let calculator = utc_calculator(PeriodRule::daily(0).unwrap());
        let (start, end) = calculator.boundaries(utc(2024, 1, 15, 14, 30, 0)).unwrap();

        assert_eq!(start.with_timezone(&Utc), utc(2024, 1, 15, 0, 0, 0));
        assert_eq!(end.with_timezone(&Utc), utc(2024, 1, 16, 0, 0, 0));
    }

    #[test]
    fn test_daily_boundaries_reset_hour_before_reset() {
        let calculator = utc_calculator(PeriodRule::daily(6).unwrap());

        // 04:30 is before the 6am reset, so the period started yesterday
        let (start, end) = calculator.boundaries(utc(2024, 1, 15, 4, 30, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2024, 1, 14, 6, 0, 0));
        assert_eq!(end.with_timezone(&Utc), utc(2024, 1, 15, 6, 0, 0));
    }

    #[test]
    fn test_daily_boundaries_reset_hour_after_reset() {
        let calculator = utc_calculator(PeriodRule::daily(6).unwrap());

        let (start, end) = calculator.boundaries(utc(2024, 1, 15, 8, 30, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2024, 1, 15, 6, 0, 0));
        assert_eq!(end.with_timezone(&Utc), utc(2024, 1, 16, 6, 0, 0));
    }

    #[test]
    fn test_daily_boundaries_exactly_at_reset() {
        let calculator = utc_calculator(PeriodRule::daily(6).unwrap());

        // Exactly at the reset instant the new period begins
        let (start, _) = calculator.boundaries(utc(2024, 1, 15, 6, 0, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2024, 1, 15, 6, 0, 0));
    }

    #[test]
    fn test_weekly_boundaries_default_monday() {
        let calculator = utc_calculator(PeriodRule::weekly(Weekday::Mon));

        // 2024-01-17 is a Wednesday
        let (start, end) = calculator.boundaries(utc(2024, 1, 17, 14, 30, 0)).unwrap();
        assert_eq!(start.weekday(), Weekday::Mon);
        assert_eq!(start.with_timezone(&Utc), utc(2024, 1, 15, 0, 0, 0));
        assert_eq!(end.signed_duration_since(&start), Duration::days(7));
    }

    #[test]
    fn test_weekly_boundaries_custom_weekday() {
        let calculator = utc_calculator(PeriodRule::weekly(Weekday::Wed));

        // 2024-01-19 is a Friday; the period started the previous Wednesday
        let (start, _) = calculator.boundaries(utc(2024, 1, 19, 14, 30, 0)).unwrap();
        assert_eq!(start.weekday(), Weekday::Wed);
        assert_eq!(start.with_timezone(&Utc), utc(2024, 1, 17, 0, 0, 0));
    }

    #[test]
    fn test_weekly_boundaries_on_reset_day() {
        let calculator = utc_calculator(PeriodRule::weekly(Weekday::Mon));

        // On a Monday the period starts that same day
        let (start, _) = calculator.boundaries(utc(2024, 1, 15, 10, 0, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2024, 1, 15, 0, 0, 0));
    }

    #[test]
    fn test_monthly_boundaries_first_of_month() {
        let calculator = utc_calculator(PeriodRule::monthly(1).unwrap());

        let (start, end) = calculator.boundaries(utc(2024, 1, 15, 14, 30, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(end.with_timezone(&Utc), utc(2024, 2, 1, 0, 0, 0));
    }

    #[test]
    fn test_monthly_boundaries_before_reset_day() {
        let calculator = utc_calculator(PeriodRule::monthly(15).unwrap());

        // The 10th is before the 15th, so the period started last month
        let (start, end) = calculator.boundaries(utc(2024, 2, 10, 0, 0, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2024, 1, 15, 0, 0, 0));
        assert_eq!(end.with_timezone(&Utc), utc(2024, 2, 15, 0, 0, 0));
    }

    #[test]
    fn test_monthly_clamp_leap_february() {
        let calculator = utc_calculator(PeriodRule::monthly(31).unwrap());

        // Mid-February, day 15 < clamped reset 29: the period started at
        // January's day 31 and ends at February's clamped day 29.
        let (start, end) = calculator.boundaries(utc(2024, 2, 15, 0, 0, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2024, 1, 31, 0, 0, 0));
        assert_eq!(end.with_timezone(&Utc), utc(2024, 2, 29, 0, 0, 0));
    }

    #[test]
    fn test_monthly_clamp_non_leap_february() {
        let calculator = utc_calculator(PeriodRule::monthly(31).unwrap());

        let (start, end) = calculator.boundaries(utc(2023, 2, 15, 0, 0, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2023, 1, 31, 0, 0, 0));
        assert_eq!(end.with_timezone(&Utc), utc(2023, 2, 28, 0, 0, 0));
    }

    #[test]
    fn test_monthly_clamp_end_reexpands_after_short_month() {
        let calculator = utc_calculator(PeriodRule::monthly(31).unwrap());

        // Mid-March: the start clamps to February 29 (leap year), but the
        // end re-applies the configured day 31 in March, not the clamped 29.
        let (start, end) = calculator.boundaries(utc(2024, 3, 15, 0, 0, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2024, 2, 29, 0, 0, 0));
        assert_eq!(end.with_timezone(&Utc), utc(2024, 3, 31, 0, 0, 0));
    }

    #[test]
    fn test_monthly_boundaries_year_wrap() {
        let calculator = utc_calculator(PeriodRule::monthly(15).unwrap());

        let (start, end) = calculator.boundaries(utc(2024, 1, 5, 0, 0, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2023, 12, 15, 0, 0, 0));
        assert_eq!(end.with_timezone(&Utc), utc(2024, 1, 15, 0, 0, 0));

        let (start, end) = calculator.boundaries(utc(2023, 12, 20, 0, 0, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2023, 12, 15, 0, 0, 0));
        assert_eq!(end.with_timezone(&Utc), utc(2024, 1, 15, 0, 0, 0));
    }

    #[test]
    fn test_custom_boundaries_first_window() {
        let anchor = utc(2024, 1, 10, 0, 0, 0);
        let calculator = utc_calculator(PeriodRule::custom(anchor));

        let (start, end) = calculator.boundaries(utc(2024, 1, 20, 14, 30, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), anchor);
        assert_eq!(end.with_timezone(&Utc), utc(2024, 2, 9, 0, 0, 0));
    }

    #[test]
    fn test_custom_boundaries_later_window() {
        let anchor = utc(2024, 1, 10, 0, 0, 0);
        let calculator = utc_calculator(PeriodRule::custom(anchor));

        // 75 days after the anchor lands in the third window
        let (start, end) = calculator.boundaries(utc(2024, 3, 25, 12, 0, 0)).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2024, 3, 10, 0, 0, 0));
        assert_eq!(end.with_timezone(&Utc), utc(2024, 4, 9, 0, 0, 0));
    }

    #[test]
    fn test_custom_boundaries_before_anchor() {
        let anchor = utc(2024, 1, 10, 0, 0, 0);
        let calculator = utc_calculator(PeriodRule::custom(anchor));

        // A reference before the anchor lands in the window ending at it
        let reference = utc(2024, 1, 9, 23, 59, 59);
        let (start, end) = calculator.boundaries(reference).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2023, 12, 11, 0, 0, 0));
        assert_eq!(end.with_timezone(&Utc), anchor);
        assert!(start <= reference && reference < end);
    }

    #[test]
    fn test_custom_boundaries_subsecond_before_window_boundary() {
        let anchor = utc(2024, 1, 10, 0, 0, 0);
        let calculator = utc_calculator(PeriodRule::custom(anchor));

        // Half a second below the anchor still belongs to the window
        // ending at it, not the one starting there
        let reference = anchor - Duration::milliseconds(500);
        let (start, end) = calculator.boundaries(reference).unwrap();
        assert_eq!(start.with_timezone(&Utc), utc(2023, 12, 11, 0, 0, 0));
        assert_eq!(end.with_timezone(&Utc), anchor);
        assert!(start <= reference && reference < end);

        // Same fraction below a later window boundary
        let boundary = utc(2024, 2, 9, 0, 0, 0);
        let reference = boundary - Duration::milliseconds(1);
        let (start, end) = calculator.boundaries(reference).unwrap();
        assert_eq!(start.with_timezone(&Utc), anchor);
        assert_eq!(end.with_timezone(&Utc), boundary);
        assert!(start <= reference && reference < end);
    }

    #[test]
    fn test_boundaries_respect_configured_timezone() {
        let config = CalculatorConfig::new(
            PeriodRule::daily(0).unwrap(),
            TimezoneConfig::parse("Asia/Tokyo").unwrap(),
        );
        let calculator = PeriodCalculator::new(config);

        // 2024-01-15 20:00 UTC is already 2024-01-16 05:00 in Tokyo
        let (start, end) = calculator.boundaries(utc(2024, 1, 15, 20, 0, 0)).unwrap();
        assert_eq!(start.format("%Y-%m-%d %H:%M").to_string(), "2024-01-16 00:00");
        // Tokyo midnight is 15:00 UTC the previous day
        assert_eq!(start.with_timezone(&Utc), utc(2024, 1, 15, 15, 0, 0));
        assert_eq!(end.with_timezone(&Utc), utc(2024, 1, 16, 15, 0, 0));
    }

    #[test]
    fn test_period_for_timestamp_is_current_flag() {
        let now = utc(2024, 1, 15, 14, 30, 0);
        let calculator = PeriodCalculator::with_clock(
            CalculatorConfig::new(
                PeriodRule::daily(0).unwrap(),
                TimezoneConfig::parse("UTC").unwrap(),
            ),
            FixedClock(now),
        );

        let period = calculator.period_for_timestamp(now).unwrap();
        assert!(period.is_current);

        let yesterday = calculator
            .period_for_timestamp(utc(2024, 1, 14, 10, 0, 0))
            .unwrap();
        assert!(!yesterday.is_current);
    }

    #[test]
    fn test_current_period_always_current() {
        let now = utc(2024, 1, 15, 14, 30, 0);
        let calculator = PeriodCalculator::with_clock(
            CalculatorConfig::new(
                PeriodRule::daily(0).unwrap(),
                TimezoneConfig::parse("UTC").unwrap(),
            ),
            FixedClock(now),
        );

        // Even for a past reference, current_period_at forces the flag
        let period = calculator.current_period_at(utc(2023, 6, 1, 0, 0, 0)).unwrap();
        assert!(period.is_current);
        assert_eq!(period.period_type, PeriodType::Daily);
    }

    #[test]
    fn test_recent_periods_daily() {
        let now = utc(2024, 1, 15, 14, 30, 0);
        let calculator = PeriodCalculator::with_clock(
            CalculatorConfig::new(
                PeriodRule::daily(0).unwrap(),
                TimezoneConfig::parse("UTC").unwrap(),
            ),
            FixedClock(now),
        );

        let periods = calculator.recent_periods(3).unwrap();
        assert_eq!(periods.len(), 3);
        assert!(periods[0].is_current);
        assert!(!periods[1].is_current);
        assert!(!periods[2].is_current);

        // Adjacent daily periods tile exactly
        assert_eq!(periods[1].end, periods[0].start);
        assert_eq!(periods[2].end, periods[1].start);
        assert_eq!(periods[2].start.with_timezone(&Utc), utc(2024, 1, 13, 0, 0, 0));
    }

    #[test]
    fn test_recent_periods_monthly_variable_lengths() {
        let calculator = utc_calculator(PeriodRule::monthly(31).unwrap());

        let periods = calculator
            .recent_periods_at(4, utc(2024, 4, 15, 0, 0, 0))
            .unwrap();
        let starts: Vec<String> = periods
            .iter()
            .map(|p| p.start.format("%Y-%m-%d").to_string())
            .collect();
        assert_eq!(starts, vec!["2024-03-31", "2024-02-29", "2024-01-31", "2023-12-31"]);

        // No overlaps, no gaps at the month seams
        for pair in periods.windows(2) {
            assert_eq!(pair[1].end, pair[0].start);
        }
    }

    #[test]
    fn test_next_reset_and_time_until() {
        let calculator = utc_calculator(PeriodRule::daily(0).unwrap());
        let reference = utc(2024, 1, 15, 14, 30, 0);

        let next_reset = calculator.next_reset_at(reference).unwrap();
        assert_eq!(next_reset.with_timezone(&Utc), utc(2024, 1, 16, 0, 0, 0));

        let remaining = calculator.time_until_reset_at(reference).unwrap();
        assert_eq!(remaining, Duration::hours(9) + Duration::minutes(30));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 1).unwrap(), 31);
        assert_eq!(days_in_month(2024, 4).unwrap(), 30);
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
    }
}
