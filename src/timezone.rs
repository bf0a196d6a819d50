//! Timezone handling for period calculations
//!
//! Provides the configured-timezone abstraction used by the calculator:
//! parsing timezone names (with an observable UTC fallback for bad names),
//! localizing naive timestamps, converting foreign-zone instants, and
//! detecting the system's local timezone.

use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::config::ConfigFallback;
use crate::error::{CcperiodError, Result};

/// Configuration for timezone handling
#[derive(Debug, Clone)]
pub struct TimezoneConfig {
    /// The timezone to use for period boundary calculations
    pub tz: Tz,
    /// Whether the timezone is UTC
    pub is_utc: bool,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        let tz = get_local_timezone();
        Self {
            is_utc: tz == Tz::UTC,
            tz,
        }
    }
}

impl TimezoneConfig {
    /// Strictly parse a timezone name, failing on unknown identifiers
    pub fn parse(timezone_str: &str) -> Result<Self> {
        let tz = Tz::from_str(timezone_str).map_err(|_| {
            CcperiodError::InvalidTimezone(format!(
                "'{}'. Use format like 'America/New_York', 'Asia/Tokyo', or 'UTC'",
                timezone_str
            ))
        })?;
        Ok(Self {
            is_utc: tz == Tz::UTC,
            tz,
        })
    }

    /// Resolve a timezone name with a UTC fallback for unknown identifiers
    ///
    /// A `None` name uses the detected local timezone. An unrecognized name
    /// resolves to UTC and reports the degradation as a [`ConfigFallback`]
    /// so callers can surface it without capturing log output.
    pub fn resolve(timezone_str: Option<&str>) -> (Self, Option<ConfigFallback>) {
        match timezone_str {
            None => (Self::default(), None),
            Some(name) => match Self::parse(name) {
                Ok(config) => (config, None),
                Err(_) => {
                    warn!("Invalid timezone {name}, using UTC");
                    (
                        Self {
                            tz: Tz::UTC,
                            is_utc: true,
                        },
                        Some(ConfigFallback::InvalidTimezone {
                            requested: name.to_string(),
                        }),
                    )
                }
            },
        }
    }

    /// Get the display name for the configured timezone
    pub fn display_name(&self) -> &str {
        if self.is_utc { "UTC" } else { self.tz.name() }
    }
}

/// Interpret a naive timestamp as wall-clock time in `tz`
///
/// Naive timestamps are never assumed to be UTC; they are taken to already
/// be in the target zone. Ambiguous local times (DST fall-back) take the
/// earliest mapping; nonexistent local times (DST spring-forward gap) are
/// resolved by scanning forward in one-hour steps.
pub fn localize(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => {
            // Gap: the wall-clock time was skipped by a DST transition.
            for hours in 1..=3 {
                let shifted = naive + Duration::hours(hours);
                match tz.from_local_datetime(&shifted) {
                    LocalResult::Single(dt) => return Ok(dt),
                    LocalResult::Ambiguous(earliest, _) => return Ok(earliest),
                    LocalResult::None => continue,
                }
            }
            Err(CcperiodError::InvalidDate(format!(
                "local time {naive} does not exist in {}",
                tz.name()
            )))
        }
    }
}

/// Convert an instant carrying another zone into `tz`
///
/// Changes the wall-clock fields, preserving the instant.
pub fn to_zone<T: TimeZone>(dt: DateTime<T>, tz: Tz) -> DateTime<Tz> {
    dt.with_timezone(&tz)
}

/// Detect the system's local timezone
///
/// Tries the `TZ` environment variable first, then `iana-time-zone`,
/// falling back to UTC.
pub fn get_local_timezone() -> Tz {
    #[allow(clippy::collapsible_if)]
    if let Ok(tz_str) = std::env::var("TZ") {
        if let Ok(tz) = Tz::from_str(&tz_str) {
            debug!("Using timezone from TZ environment variable: {}", tz_str);
            return tz;
        }
    }

    match iana_time_zone::get_timezone() {
        Ok(tz_str) => match Tz::from_str(&tz_str) {
            Ok(tz) => {
                debug!("Using system timezone from iana-time-zone: {}", tz_str);
                tz
            }
            Err(_) => {
                debug!(
                    "Could not parse timezone from iana-time-zone: '{}', falling back to UTC",
                    tz_str
                );
                Tz::UTC
            }
        },
        Err(e) => {
            debug!(
                "Could not detect local timezone via iana-time-zone: {:?}, falling back to UTC",
                e
            );
            Tz::UTC
        }
    }
}

/// Midnight at the start of the given local date
///
/// Used by every boundary rule; DST gaps at midnight resolve the same way
/// as [`localize`].
pub(crate) fn local_midnight(date: chrono::NaiveDate, tz: Tz) -> Result<DateTime<Tz>> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| CcperiodError::InvalidDate(format!("invalid date {date}")))?;
    localize(naive, tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_timezone_config_parse() {
        let config = TimezoneConfig::parse("America/New_York").unwrap();
        assert!(!config.is_utc);
        assert_eq!(config.tz.name(), "America/New_York");

        let config = TimezoneConfig::parse("UTC").unwrap();
        assert!(config.is_utc);
        assert_eq!(config.display_name(), "UTC");

        assert!(TimezoneConfig::parse("Invalid/Timezone").is_err());
    }

    #[test]
    fn test_timezone_resolve_fallback() {
        let (config, fallback) = TimezoneConfig::resolve(Some("Not/A_Zone"));
        assert!(config.is_utc);
        assert!(matches!(
            fallback,
            Some(ConfigFallback::InvalidTimezone { ref requested }) if requested == "Not/A_Zone"
        ));

        let (config, fallback) = TimezoneConfig::resolve(Some("Asia/Tokyo"));
        assert_eq!(config.tz, chrono_tz::Asia::Tokyo);
        assert!(fallback.is_none());
    }

    #[test]
    fn test_localize_is_wall_clock_not_utc() {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let tokyo = localize(naive, chrono_tz::Asia::Tokyo).unwrap();

        // 09:00 in Tokyo is 00:00 UTC, not 09:00 UTC
        assert_eq!(tokyo.with_timezone(&Utc).format("%H:%M").to_string(), "00:00");
    }

    #[test]
    fn test_localize_dst_gap_scans_forward() {
        // 2024-03-10 02:30 does not exist in US Eastern (spring forward)
        let naive = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let resolved = localize(naive, chrono_tz::America::New_York).unwrap();
        assert_eq!(resolved.format("%H:%M").to_string(), "03:30");
    }

    #[test]
    fn test_localize_ambiguous_takes_earliest() {
        // 2024-11-03 01:30 occurs twice in US Eastern (fall back)
        let naive = NaiveDate::from_ymd_opt(2024, 11, 3)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();
        let resolved = localize(naive, chrono_tz::America::New_York).unwrap();
        // Earliest mapping is still on EDT (UTC-4)
        assert_eq!(resolved.offset().to_string(), "EDT");
    }

    #[test]
    fn test_to_zone_preserves_instant() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let tokyo = to_zone(utc, chrono_tz::Asia::Tokyo);
        assert_eq!(tokyo.format("%H:%M").to_string(), "09:00");
        assert_eq!(tokyo.with_timezone(&Utc), utc);
    }
}
