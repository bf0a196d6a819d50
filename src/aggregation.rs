//! Aggregation of usage records into per-period summaries
//!
//! A [`PeriodSummary`] is built by folding record batches into it; only
//! records whose timestamp falls inside the summary's period are counted.
//! [`SummaryBuilder`] wraps the fold with a consumed-batch-id guard so that
//! adding the same batch twice is a detectable error instead of silent
//! double-counting.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::error::{CcperiodError, Result};
use crate::types::{Period, TokenCounts, UsageBatch, UsageEntry};

/// Summary of usage and costs within one billing period
///
/// Built once per period by folding record batches; read-only after the
/// aggregation pass. Records outside the period are never counted.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodSummary {
    /// The period this summary covers
    pub period: Period,
    /// Total cost in USD of all records in the period
    pub total_cost: f64,
    /// Token counts summed over all records in the period
    pub tokens: TokenCounts,
    /// Number of records counted
    pub record_count: usize,
    /// Unique non-empty model names, in first-seen order
    pub models_used: Vec<String>,
    /// Cost per model (the empty model name is tracked like any other key)
    pub per_model_costs: BTreeMap<String, f64>,
    /// Earliest counted record timestamp
    pub first_usage: Option<DateTime<Utc>>,
    /// Latest counted record timestamp
    pub last_usage: Option<DateTime<Utc>>,
}

impl PeriodSummary {
    /// Create an empty summary for a period
    pub fn new(period: Period) -> Self {
        Self {
            period,
            total_cost: 0.0,
            tokens: TokenCounts::default(),
            record_count: 0,
            models_used: Vec::new(),
            per_model_costs: BTreeMap::new(),
            first_usage: None,
            last_usage: None,
        }
    }

    /// Fold a slice of records into this summary
    ///
    /// Records outside the period are skipped. If no record falls inside
    /// the period the summary is left completely untouched. Returns the
    /// number of records counted.
    ///
    /// Calling this twice with the same records double-counts; use
    /// [`SummaryBuilder::add_batch`] when batches carry identities.
    pub fn add_records(&mut self, records: &[UsageEntry]) -> usize {
        let relevant: Vec<&UsageEntry> = records
            .iter()
            .filter(|entry| self.period.contains(entry.timestamp))
            .collect();

        if relevant.is_empty() {
            return 0;
        }

        for entry in &relevant {
            self.total_cost += entry.cost;
            self.tokens += entry.tokens;

            let model = entry.model.as_str();
            if !entry.model.is_empty() && !self.models_used.iter().any(|m| m == model) {
                self.models_used.push(model.to_string());
            }
            *self.per_model_costs.entry(model.to_string()).or_insert(0.0) += entry.cost;

            // Strict comparisons: ties keep the earliest-processed value.
            match self.first_usage {
                Some(first) if entry.timestamp >= first => {}
                _ => self.first_usage = Some(entry.timestamp),
            }
            match self.last_usage {
                Some(last) if entry.timestamp <= last => {}
                _ => self.last_usage = Some(entry.timestamp),
            }
        }

        self.record_count += relevant.len();
        relevant.len()
    }

    /// Average cost per day over the period's full length
    pub fn average_cost_per_day(&self) -> f64 {
        let duration_days = self.period.duration_days();
        if duration_days > 0.0 {
            self.total_cost / duration_days
        } else {
            0.0
        }
    }

    /// Percentage of the period elapsed at `now`, `0.0..=100.0`
    ///
    /// A non-current period is always fully elapsed. For the current
    /// period the fraction interpolates linearly between the boundaries
    /// and clamps outside them.
    pub fn elapsed_fraction(&self, now: DateTime<Utc>) -> f64 {
        if !self.period.is_current {
            return 100.0;
        }
        if now <= self.period.start {
            return 0.0;
        }
        if now >= self.period.end {
            return 100.0;
        }

        let elapsed = now.signed_duration_since(&self.period.start).num_seconds() as f64;
        let total = self.period.duration().num_seconds() as f64;
        elapsed / total * 100.0
    }
}

/// Guarded accumulator for building a [`PeriodSummary`] from batches
///
/// Tracks which batch ids have already contributed, turning a double-add
/// into [`CcperiodError::DuplicateBatch`]. A batch whose records all fall
/// outside the period contributes nothing and is not marked consumed;
/// re-presenting it later is harmless by definition.
#[derive(Debug)]
pub struct SummaryBuilder {
    summary: PeriodSummary,
    consumed: HashSet<String>,
}

impl SummaryBuilder {
    /// Start an empty summary for a period
    pub fn new(period: Period) -> Self {
        Self {
            summary: PeriodSummary::new(period),
            consumed: HashSet::new(),
        }
    }

    /// Fold one identified batch into the summary
    ///
    /// Returns the number of records counted, or an error if this batch id
    /// was already aggregated.
    pub fn add_batch(&mut self, batch: &UsageBatch) -> Result<usize> {
        if self.consumed.contains(&batch.id) {
            return Err(CcperiodError::DuplicateBatch(batch.id.clone()));
        }

        let added = self.summary.add_records(&batch.entries);
        if added > 0 {
            self.consumed.insert(batch.id.clone());
        }
        Ok(added)
    }

    /// Fold anonymous records into the summary, without the duplicate guard
    pub fn add_records(&mut self, records: &[UsageEntry]) -> usize {
        self.summary.add_records(records)
    }

    /// Finish building and take the summary
    pub fn finish(self) -> PeriodSummary {
        self.summary
    }
}

/// Fold an ordered sequence of batches into a fresh summary
///
/// Batch order affects nothing observable except which of two equal
/// extreme timestamps wins the `first_usage`/`last_usage` slots (the
/// earliest-processed one does). Fails on a repeated batch id.
pub fn summarize(period: Period, batches: &[UsageBatch]) -> Result<PeriodSummary> {
    let mut builder = SummaryBuilder::new(period);
    for batch in batches {
        builder.add_batch(batch)?;
    }
    Ok(builder.finish())
}
