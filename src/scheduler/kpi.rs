//! Match quality metrics (KPIs).
//!
//! Computes summary indicators from a completed match result and the
//! registry it was computed from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Solved | Requests served |
//! | Fulfillment Rate | solved / total requests |
//! | Solved by Day | Requests served on each day |
//! | Busy Days | Days each provider served a request |
//! | Avg Utilization | Mean of busy days / horizon over all providers |
//! | Unservable | Requests whose category nobody offers |

use std::collections::{BTreeMap, HashMap};

use crate::models::{MatchResult, Registry};

/// Match performance indicators.
#[derive(Debug, Clone)]
pub struct MatchKpi {
    /// Number of solved requests.
    pub solved: usize,
    /// Number of unsolved requests.
    pub unsolved: usize,
    /// Fraction of requests solved (0.0..1.0).
    pub fulfillment_rate: f64,
    /// Solved requests per day (only days with at least one).
    pub solved_by_day: BTreeMap<u32, usize>,
    /// Busy days per provider (every registered provider present).
    pub busy_days_by_provider: HashMap<String, usize>,
    /// Average provider utilization over the horizon (0.0..1.0).
    pub avg_utilization: f64,
    /// Requests that no provider could ever serve.
    pub unservable: Vec<String>,
}

impl MatchKpi {
    /// Computes KPIs from a match result and its registry.
    ///
    /// # Arguments
    /// * `registry` - The registry the result was computed from.
    /// * `result` - The completed match result.
    /// * `horizon_days` - Horizon used by the run.
    pub fn calculate(registry: &Registry, result: &MatchResult, horizon_days: u32) -> Self {
        let solved = result.solved_count();
        let unsolved = result.unsolved.len();
        let total = solved + unsolved;

        let mut solved_by_day = BTreeMap::new();
        let mut busy_days_by_provider: HashMap<String, usize> = registry
            .provider_ids()
            .map(|id| (id.to_string(), 0))
            .collect();

        for request in &result.solved {
            if let Some(day) = request.solved_day {
                *solved_by_day.entry(day).or_insert(0) += 1;
            }
            if let Some(provider) = &request.solved_by {
                *busy_days_by_provider.entry(provider.clone()).or_insert(0) += 1;
            }
        }

        let avg_utilization = if busy_days_by_provider.is_empty() || horizon_days == 0 {
            0.0
        } else {
            let busy: usize = busy_days_by_provider.values().sum();
            busy as f64 / (busy_days_by_provider.len() as f64 * horizon_days as f64)
        };

        let fulfillment_rate = if total == 0 {
            0.0
        } else {
            solved as f64 / total as f64
        };

        let unservable = registry
            .requests()
            .iter()
            .filter(|r| registry.providers_for(&r.category).is_empty())
            .map(|r| r.id.clone())
            .collect();

        Self {
            solved,
            unsolved,
            fulfillment_rate,
            solved_by_day,
            busy_days_by_provider,
            avg_utilization,
            unservable,
        }
    }

    /// Whether the result meets the given fulfillment threshold.
    pub fn meets_fulfillment(&self, min_rate: f64) -> bool {
        self.fulfillment_rate >= min_rate
    }
}
