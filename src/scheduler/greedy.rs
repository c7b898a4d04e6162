//! Day-by-day greedy request matcher.
//!
//! # Algorithm
//!
//! 1. Compute each request's provider ratio against the provider count of
//!    this run.
//! 2. Order requests once with the rule engine (default: latest eligible
//!    day, then provider ratio; stable).
//! 3. For each day of the horizon:
//!    a. take the pending requests eligible today, in priority order;
//!    b. rank today's providers by demand, lowest first;
//!    c. give each request the first ranked provider still free today that
//!       offers its category. A provider serves one request per day.
//! 4. Solved requests leave the pending list for good; requests never
//!    served by the end of their window stay unsolved.
//!
//! The result is maximal-effort, not a maximum matching.
//!
//! # Complexity
//! O(D * (n * p)) where D=horizon days, n=requests, p=providers per category.

use serde::{Deserialize, Serialize};

use super::ranking::rank_providers;
use crate::dispatching::RuleEngine;
use crate::models::{MatchResult, Registry, ServiceRequest};

/// Default planning horizon in days.
pub const DEFAULT_HORIZON_DAYS: u32 = 20;

/// Immutable run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of schedulable days, numbered from 1.
    pub horizon_days: u32,
}

impl MatchConfig {
    /// Creates a config with the given horizon.
    pub fn new(horizon_days: u32) -> Self {
        Self { horizon_days }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON_DAYS)
    }
}

/// Greedy, priority-ordered request matcher.
///
/// # Example
///
/// ```
/// use u_match::models::{DaySpec, Registry};
/// use u_match::scheduler::GreedyMatcher;
///
/// let mut registry = Registry::new();
/// registry.add_service("A", ["x"]);
/// registry.add_service("B", ["y"]);
/// registry.add_request("r1", "x", DaySpec::Range { first: 1, last: 3 });
/// registry.add_request("r2", "y", DaySpec::Single(2));
///
/// let result = GreedyMatcher::default().run(&registry);
/// assert_eq!(result.solved_count(), 2);
///
/// let r1 = result.solved_request("r1").unwrap();
/// assert_eq!(r1.solved_by.as_deref(), Some("A"));
/// assert_eq!(r1.solved_day, Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct GreedyMatcher {
    config: MatchConfig,
    rule_engine: RuleEngine,
}

impl GreedyMatcher {
    /// Creates a matcher with the default request ordering.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            rule_engine: RuleEngine::deadline_then_scarcity(),
        }
    }

    /// Replaces the request ordering.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Run configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Matches the registry's requests to its providers.
    ///
    /// Never modifies the registry, so repeated runs give the same result.
    /// An unschedulable registry yields an empty solved set.
    #[tracing::instrument(
        level = "debug",
        name = "greedy match",
        skip_all,
        fields(
            providers = registry.provider_count(),
            requests = registry.request_count(),
            horizon = self.config.horizon_days,
        )
    )]
    pub fn run(&self, registry: &Registry) -> MatchResult {
        let mut result = MatchResult::new();

        if !registry.is_schedulable() {
            tracing::debug!("nothing to schedule");
            result.unsolved = registry.requests().iter().map(|r| r.id.clone()).collect();
            return result;
        }

        let requests = with_provider_ratios(registry);
        let order = self.rule_engine.sort_indices(&requests);
        let mut slots: Vec<Option<ServiceRequest>> = requests.into_iter().map(Some).collect();
        let mut pending: Vec<ServiceRequest> =
            order.iter().filter_map(|&idx| slots[idx].take()).collect();

        for day in 1..=self.config.horizon_days {
            if pending.is_empty() {
                break;
            }

            let day_requests: Vec<usize> = pending
                .iter()
                .enumerate()
                .filter(|(_, r)| r.is_eligible_on(day))
                .map(|(idx, _)| idx)
                .collect();
            if day_requests.is_empty() {
                continue;
            }

            let mut available =
                rank_providers(registry, day_requests.iter().map(|&idx| &pending[idx]));

            for &idx in &day_requests {
                let request = &mut pending[idx];
                let found = available.iter().position(|provider| {
                    registry
                        .providers_for(&request.category)
                        .iter()
                        .any(|p| p == provider)
                });

                if let Some(pos) = found {
                    let provider = available.remove(pos);
                    tracing::trace!(day, request = %request.id, provider, "matched");
                    request.mark_solved(provider, day);
                }
            }

            let (solved, still_pending): (Vec<_>, Vec<_>) =
                pending.into_iter().partition(ServiceRequest::is_solved);
            tracing::debug!(
                day,
                eligible = day_requests.len(),
                solved = solved.len(),
                "day complete"
            );
            for request in solved {
                result.add_solved(request);
            }
            pending = still_pending;
        }

        result.unsolved = pending.into_iter().map(|r| r.id).collect();
        tracing::debug!(
            solved = result.solved_count(),
            unsolved = result.unsolved.len(),
            "match complete"
        );
        result
    }
}

impl Default for GreedyMatcher {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

/// Copies the registry's requests with `provider_ratio` filled in for
/// this run. A category nobody offers gets ratio 0.
fn with_provider_ratios(registry: &Registry) -> Vec<ServiceRequest> {
    let total = registry.provider_count() as f64;
    registry
        .requests()
        .iter()
        .map(|r| {
            let offering = registry.providers_for(&r.category).len() as f64;
            r.clone().with_provider_ratio(offering / total)
        })
        .collect()
}
