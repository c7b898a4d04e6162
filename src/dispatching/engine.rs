//! Rule engine for multi-criteria request ordering.
//!
//! Composes dispatching rules lexicographically with a configurable final
//! tie-breaking strategy.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, RuleScore};
use crate::models::ServiceRequest;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep the input order (stable sort).
    #[default]
    Stable,
    /// Deterministic by request ID (lexicographic).
    ById,
}

/// A composable rule engine for request prioritization.
///
/// Rules are applied in sequence; a later rule is only consulted when all
/// earlier rules score two requests equally.
///
/// # Example
/// ```
/// use u_match::dispatching::RuleEngine;
/// use u_match::models::{DaySpec, ServiceRequest};
///
/// let requests = vec![
///     ServiceRequest::new("late", "x", DaySpec::Single(9)).with_provider_ratio(0.1),
///     ServiceRequest::new("common", "y", DaySpec::Single(3)).with_provider_ratio(0.9),
///     ServiceRequest::new("rare", "z", DaySpec::Single(3)).with_provider_ratio(0.2),
/// ];
///
/// let engine = RuleEngine::deadline_then_scarcity();
/// assert_eq!(engine.sort_indices(&requests), vec![2, 1, 0]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Stable,
        }
    }

    /// Orders by latest eligible day, then by provider ratio.
    ///
    /// This is the matcher's default ordering.
    pub fn deadline_then_scarcity() -> Self {
        Self::new()
            .with_rule(rules::LatestDay)
            .with_rule(rules::ProviderScarcity)
    }

    /// Appends a rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts requests by priority (highest priority first).
    ///
    /// Returns indices into the original slice. The sort is stable, so
    /// requests that tie on every rule keep their input order unless the
    /// final tie-breaker says otherwise.
    pub fn sort_indices(&self, requests: &[ServiceRequest]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..requests.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&requests[a], &requests[b]));
        indices
    }

    /// Evaluates a single request and returns scores from each rule.
    pub fn evaluate(&self, request: &ServiceRequest) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(request)).collect()
    }

    fn compare(&self, a: &ServiceRequest, b: &ServiceRequest) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).total_cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        match self.tie_breaker {
            TieBreaker::Stable => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
