//! Calculator configuration
//!
//! Configuration is validated exactly once, here. The period rule is a sum
//! type: each variant carries only the reset field meaningful to it, so a
//! "reset day" can never be misread as an hour, weekday, or day-of-month
//! for the wrong period type. Degraded-but-recoverable inputs (bad timezone
//! name, custom period without an anchor) resolve to safe defaults and are
//! reported as [`ConfigFallback`] values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc, Weekday};
use std::fmt;
use tracing::warn;

use crate::error::{CcperiodError, Result};
use crate::timezone::{self, TimezoneConfig};
use crate::types::PeriodType;

/// Boundary rule for one period type
///
/// # Examples
/// ```
/// use ccperiod::config::PeriodRule;
/// use chrono::Weekday;
///
/// let rule = PeriodRule::daily(6).unwrap();
/// assert_eq!(rule.period_type().to_string(), "daily");
///
/// let rule = PeriodRule::weekly(Weekday::Wed);
/// assert_eq!(rule.period_type().to_string(), "weekly");
///
/// assert!(PeriodRule::monthly(32).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PeriodRule {
    /// Reset every day at `reset_hour:00` local time (0 = midnight)
    Daily {
        /// Hour of day the period starts, `0..=23`
        reset_hour: u32,
    },
    /// Reset every week at midnight on `reset_weekday`
    Weekly {
        /// Weekday the period starts
        reset_weekday: Weekday,
    },
    /// Reset every month at midnight on `reset_day`, clamped to month length
    Monthly {
        /// Day of month the period starts, `1..=31`
        reset_day: u32,
    },
    /// Fixed 30-day windows tiled from `anchor`
    Custom {
        /// Instant the first window starts at
        anchor: DateTime<Utc>,
    },
}

impl PeriodRule {
    /// Daily rule with a reset hour in `0..=23`
    pub fn daily(reset_hour: u32) -> Result<Self> {
        if reset_hour > 23 {
            return Err(CcperiodError::InvalidResetOffset {
                period_type: PeriodType::Daily.to_string(),
                offset: reset_hour as i64,
            });
        }
        Ok(Self::Daily { reset_hour })
    }

    /// Weekly rule resetting on the given weekday
    pub fn weekly(reset_weekday: Weekday) -> Self {
        Self::Weekly { reset_weekday }
    }

    /// Weekly rule from a numeric weekday, `0` = Monday .. `6` = Sunday
    pub fn weekly_from_index(index: i64) -> Result<Self> {
        let weekday = u8::try_from(index)
            .ok()
            .and_then(|i| Weekday::try_from(i).ok())
            .ok_or(CcperiodError::InvalidResetOffset {
                period_type: PeriodType::Weekly.to_string(),
                offset: index,
            })?;
        Ok(Self::Weekly {
            reset_weekday: weekday,
        })
    }

    /// Monthly rule with a reset day in `1..=31`
    pub fn monthly(reset_day: u32) -> Result<Self> {
        if !(1..=31).contains(&reset_day) {
            return Err(CcperiodError::InvalidResetOffset {
                period_type: PeriodType::Monthly.to_string(),
                offset: reset_day as i64,
            });
        }
        Ok(Self::Monthly { reset_day })
    }

    /// Custom rule anchored at the given instant
    pub fn custom(anchor: DateTime<Utc>) -> Self {
        Self::Custom { anchor }
    }

    /// The period type this rule produces
    pub fn period_type(&self) -> PeriodType {
        match self {
            Self::Daily { .. } => PeriodType::Daily,
            Self::Weekly { .. } => PeriodType::Weekly,
            Self::Monthly { .. } => PeriodType::Monthly,
            Self::Custom { .. } => PeriodType::Custom,
        }
    }
}

/// A non-fatal configuration degradation
///
/// Returned alongside the resolved configuration so callers and tests can
/// observe that a fallback occurred; also logged at `warn` level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFallback {
    /// Timezone name was not a known IANA identifier; UTC was used
    InvalidTimezone {
        /// The rejected timezone name
        requested: String,
    },
    /// Custom period requested without an anchor date; the plain daily
    /// rule was used
    MissingCustomAnchor,
}

impl fmt::Display for ConfigFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimezone { requested } => {
                write!(f, "invalid timezone '{requested}', using UTC")
            }
            Self::MissingCustomAnchor => {
                write!(f, "no custom anchor date provided, using daily periods")
            }
        }
    }
}

/// Immutable configuration for one calculator instance
///
/// Changing the period type means building a new configuration and a new
/// calculator.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    /// Boundary rule
    pub rule: PeriodRule,
    /// Timezone all boundaries are computed in
    pub timezone: TimezoneConfig,
}

impl CalculatorConfig {
    /// Build a configuration from already-validated parts
    pub fn new(rule: PeriodRule, timezone: TimezoneConfig) -> Self {
        Self { rule, timezone }
    }
}

/// Result of string-level configuration resolution
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The resolved configuration
    pub config: CalculatorConfig,
    /// Fallbacks applied while resolving, empty when nothing degraded
    pub fallbacks: Vec<ConfigFallback>,
}

impl CalculatorConfig {
    /// Resolve raw configuration strings into a validated configuration
    ///
    /// This is the one-shot validation surface: an unrecognized period type
    /// is a hard error, while an unknown timezone name degrades to UTC and
    /// a custom period without an anchor degrades to the plain daily rule,
    /// both reported in [`ResolvedConfig::fallbacks`].
    ///
    /// `reset_offset` means hour-of-day for daily, weekday index
    /// (0 = Monday) for weekly, and day-of-month for monthly periods; it is
    /// ignored for custom periods.
    pub fn resolve(
        period_type: &str,
        reset_offset: Option<i64>,
        anchor: Option<&str>,
        timezone_name: Option<&str>,
    ) -> Result<ResolvedConfig> {
        let mut fallbacks = Vec::new();

        let (timezone, tz_fallback) = TimezoneConfig::resolve(timezone_name);
        if let Some(fallback) = tz_fallback {
            fallbacks.push(fallback);
        }

        let period_type: PeriodType = period_type.parse()?;
        let rule = match period_type {
            PeriodType::Daily => {
                let hour = validate_offset(period_type, reset_offset.unwrap_or(0))?;
                PeriodRule::daily(hour)?
            }
            PeriodType::Weekly => PeriodRule::weekly_from_index(reset_offset.unwrap_or(0))?,
            PeriodType::Monthly => {
                let day = validate_offset(period_type, reset_offset.unwrap_or(1))?;
                PeriodRule::monthly(day)?
            }
            PeriodType::Custom => match anchor {
                Some(anchor_str) => {
                    let anchor = parse_anchor(anchor_str, &timezone)?;
                    PeriodRule::custom(anchor)
                }
                None => {
                    warn!("No custom anchor date provided, falling back to daily periods");
                    fallbacks.push(ConfigFallback::MissingCustomAnchor);
                    PeriodRule::Daily { reset_hour: 0 }
                }
            },
        };

        Ok(ResolvedConfig {
            config: CalculatorConfig::new(rule, timezone),
            fallbacks,
        })
    }
}

fn validate_offset(period_type: PeriodType, offset: i64) -> Result<u32> {
    u32::try_from(offset).map_err(|_| CcperiodError::InvalidResetOffset {
        period_type: period_type.to_string(),
        offset,
    })
}

/// Parse an anchor date string in the configured timezone
///
/// Accepts RFC 3339, a naive `%Y-%m-%dT%H:%M:%S`, or a bare `%Y-%m-%d`
/// (midnight). Naive forms are wall-clock times in the configured zone.
fn parse_anchor(anchor_str: &str, timezone: &TimezoneConfig) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(anchor_str) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(anchor_str, "%Y-%m-%dT%H:%M:%S") {
        return Ok(timezone::localize(naive, timezone.tz)?.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(anchor_str, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| CcperiodError::InvalidAnchor(anchor_str.to_string()))?;
        return Ok(timezone::localize(naive, timezone.tz)?.with_timezone(&Utc));
    }
    Err(CcperiodError::InvalidAnchor(anchor_str.to_string()))
}
