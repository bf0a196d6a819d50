//! Core domain types for ccperiod
//!
//! This module contains the value objects shared by the boundary calculator
//! and the aggregation engine: token counts, usage records, batches, and the
//! `Period` interval itself.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Strongly-typed model name wrapper
///
/// Ensures model names are consistently handled when building per-model
/// cost breakdowns.
///
/// # Examples
/// ```
/// use ccperiod::types::ModelName;
///
/// let model = ModelName::new("claude-3-opus");
/// assert_eq!(model.as_str(), "claude-3-opus");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelName(String);

impl ModelName {
    /// Create a new ModelName from any string-like type
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the model name is the empty string
    ///
    /// Records without a model are still costed, but an empty name never
    /// enters a summary's `models_used` list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Token counts for usage tracking
///
/// Tracks all four token categories consumed by a Claude API call.
/// Counts only ever accumulate; there is no subtraction.
///
/// # Examples
/// ```
/// use ccperiod::types::TokenCounts;
///
/// let tokens = TokenCounts::new(100, 50, 10, 5);
/// assert_eq!(tokens.total(), 165);
///
/// let more = TokenCounts::new(50, 25, 5, 2);
/// let combined = tokens + more;
/// assert_eq!(combined.input_tokens, 150);
/// ```
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenCounts {
    /// Input tokens used
    pub input_tokens: u64,
    /// Output tokens generated
    pub output_tokens: u64,
    /// Cache creation tokens
    pub cache_creation_tokens: u64,
    /// Cache read tokens
    pub cache_read_tokens: u64,
}

impl TokenCounts {
    /// Create new TokenCounts
    pub fn new(
        input_tokens: u64,
        output_tokens: u64,
        cache_creation_tokens: u64,
        cache_read_tokens: u64,
    ) -> Self {
        Self {
            input_tokens,
            output_tokens,
            cache_creation_tokens,
            cache_read_tokens,
        }
    }

    /// Calculate total tokens
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens + self.cache_creation_tokens + self.cache_read_tokens
    }
}

impl Add for TokenCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            input_tokens: self.input_tokens + other.input_tokens,
            output_tokens: self.output_tokens + other.output_tokens,
            cache_creation_tokens: self.cache_creation_tokens + other.cache_creation_tokens,
            cache_read_tokens: self.cache_read_tokens + other.cache_read_tokens,
        }
    }
}

impl AddAssign for TokenCounts {
    fn add_assign(&mut self, other: Self) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
        self.cache_creation_tokens += other.cache_creation_tokens;
        self.cache_read_tokens += other.cache_read_tokens;
    }
}

/// A single usage record from the upstream session pipeline
///
/// Produced (and deduplicated) by the data-loading collaborator; this crate
/// only ever borrows these, filters them by period containment, and folds
/// them into summaries.
///
/// # Examples
/// ```
/// use ccperiod::types::{ModelName, TokenCounts, UsageEntry};
/// use chrono::Utc;
///
/// let entry = UsageEntry {
///     timestamp: Utc::now(),
///     tokens: TokenCounts::new(1000, 500, 100, 50),
///     cost: 0.0255,
///     model: ModelName::new("claude-3-opus"),
///     message_id: "msg_123".to_string(),
///     request_id: "req_456".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageEntry {
    /// Timestamp when the API call was made
    pub timestamp: DateTime<Utc>,
    /// Token counts broken down by type
    #[serde(flatten)]
    pub tokens: TokenCounts,
    /// Cost in USD
    pub cost: f64,
    /// Model that was used for this API call
    pub model: ModelName,
    /// Message identifier from the usage log
    #[serde(default)]
    pub message_id: String,
    /// Request identifier from the usage log
    #[serde(default)]
    pub request_id: String,
}

/// An externally-produced grouping of usage records
///
/// Stand-in for the session-block concept: the aggregator does not care how
/// batches are formed, only that each record appears in at most one batch.
/// The `id` exists so that adding the same batch to a summary twice is a
/// detectable error instead of silent double-counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageBatch {
    /// Stable identifier for this batch (e.g. the session block id)
    pub id: String,
    /// Records in this batch
    pub entries: Vec<UsageEntry>,
}

impl UsageBatch {
    /// Create a new batch
    pub fn new(id: impl Into<String>, entries: Vec<UsageEntry>) -> Self {
        Self {
            id: id.into(),
            entries,
        }
    }
}

/// Types of billing periods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// 24-hour periods, resetting at midnight or a configured hour
    #[default]
    Daily,
    /// 7-day periods, resetting on a configured weekday
    Weekly,
    /// Calendar-month periods, resetting on a configured day of month
    Monthly,
    /// Fixed 30-day windows tiled from an anchor instant
    Custom,
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

impl std::str::FromStr for PeriodType {
    type Err = crate::error::CcperiodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "custom" => Ok(Self::Custom),
            _ => Err(crate::error::CcperiodError::UnknownPeriodType(s.to_string())),
        }
    }
}

/// One billing period: a half-open interval `[start, end)` plus metadata
///
/// `start` and `end` carry the configured timezone. `is_current` is a
/// snapshot taken at construction time and never re-evaluated.
///
/// # Examples
/// ```
/// use ccperiod::types::{Period, PeriodType};
/// use chrono::TimeZone;
/// use chrono_tz::Tz;
///
/// let start = Tz::UTC.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
/// let end = Tz::UTC.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap();
/// let period = Period::new(PeriodType::Daily, start, end, true);
///
/// assert!(period.contains(start.with_timezone(&chrono::Utc)));
/// assert!(!period.contains(end.with_timezone(&chrono::Utc)));
/// assert_eq!(period.duration_days(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Period {
    /// Kind of billing period
    pub period_type: PeriodType,
    /// Inclusive start of the period, in the configured timezone
    pub start: DateTime<Tz>,
    /// Exclusive end of the period, in the configured timezone
    pub end: DateTime<Tz>,
    /// Whether this period contained "now" when it was constructed
    pub is_current: bool,
    /// Optional human-readable label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Period {
    /// Create a new period without a label
    ///
    /// Boundaries must satisfy `start < end`; the calculator guarantees
    /// this for every period it produces.
    pub fn new(
        period_type: PeriodType,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
        is_current: bool,
    ) -> Self {
        debug_assert!(start < end, "period start must precede end");
        Self {
            period_type,
            start,
            end,
            is_current,
            label: None,
        }
    }

    /// Attach a label to this period
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check whether a timestamp falls within this period
    ///
    /// Half-open: a record exactly at `end` belongs to the next period.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp < self.end
    }

    /// Period length
    pub fn duration(&self) -> chrono::Duration {
        self.end.signed_duration_since(&self.start)
    }

    /// Period length in days
    pub fn duration_days(&self) -> f64 {
        self.duration().num_seconds() as f64 / (24.0 * 3600.0)
    }

    /// Period length in hours
    pub fn duration_hours(&self) -> f64 {
        self.duration().num_seconds() as f64 / 3600.0
    }

    /// Default display label for this period
    ///
    /// The display collaborator may override this via [`Period::with_label`];
    /// the calculator leaves `label` unset.
    pub fn default_label(&self) -> String {
        match self.period_type {
            PeriodType::Daily => self.start.format("%Y-%m-%d").to_string(),
            PeriodType::Weekly => format!("Week of {}", self.start.format("%Y-%m-%d")),
            PeriodType::Monthly => self.start.format("%Y-%m").to_string(),
            PeriodType::Custom => format!(
                "{} \u{2192} {}",
                self.start.format("%Y-%m-%d"),
                self.end.format("%Y-%m-%d")
            ),
        }
    }
}
