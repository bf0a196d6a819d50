//! ccperiod - Billing-period calculations for Claude usage data
//!
//! This library computes billing-period boundaries (daily, weekly, monthly,
//! or custom 30-day windows, with configurable reset offsets and timezone)
//! and aggregates usage records into per-period cost and token summaries.
//!
//! Data loading, session-block construction, burn-rate math, and display
//! formatting live in collaborating crates; this one owns only the
//! boundary calculator and the aggregation engine.
//!
//! # Examples
//!
//! ```
//! use ccperiod::{
//!     aggregation::summarize,
//!     calculator::PeriodCalculator,
//!     config::CalculatorConfig,
//!     types::{ModelName, TokenCounts, UsageBatch, UsageEntry},
//! };
//! use chrono::{TimeZone, Utc};
//!
//! fn main() -> ccperiod::Result<()> {
//!     // Validate configuration once; bad timezones degrade to UTC with
//!     // an observable fallback instead of failing.
//!     let resolved = CalculatorConfig::resolve("daily", None, None, Some("UTC"))?;
//!     let calculator = PeriodCalculator::new(resolved.config);
//!
//!     let reference = Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap();
//!     let period = calculator.current_period_at(reference)?;
//!
//!     let batch = UsageBatch::new(
//!         "session-1",
//!         vec![UsageEntry {
//!             timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
//!             tokens: TokenCounts::new(100, 50, 0, 0),
//!             cost: 0.05,
//!             model: ModelName::new("claude-3-sonnet"),
//!             message_id: String::new(),
//!             request_id: String::new(),
//!         }],
//!     );
//!
//!     let summary = summarize(period, &[batch])?;
//!     assert_eq!(summary.record_count, 1);
//!     Ok(())
//! }
//! ```

pub mod aggregation;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod error;
pub mod reset;
pub mod timezone;
pub mod types;

// Re-export commonly used types
pub use aggregation::{PeriodSummary, SummaryBuilder, summarize};
pub use calculator::PeriodCalculator;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CalculatorConfig, ConfigFallback, PeriodRule, ResolvedConfig};
pub use error::{CcperiodError, Result};
pub use timezone::TimezoneConfig;
pub use types::{ModelName, Period, PeriodType, TokenCounts, UsageBatch, UsageEntry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
