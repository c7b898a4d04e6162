//! Dispatching rules and rule engine for request ordering.
//!
//! The matcher works through requests in a fixed priority order computed
//! once per run. That order comes from a [`RuleEngine`]: a sequence of
//! [`DispatchingRule`]s applied lexicographically, with later rules only
//! consulted on ties.
//!
//! # Usage
//!
//! ```
//! use u_match::dispatching::{rules, RuleEngine};
//!
//! // Earliest deadline first, scarcest category breaks ties.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::LatestDay)
//!     .with_rule(rules::ProviderScarcity);
//! # let _ = engine;
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::ServiceRequest;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (handled first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates request priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// requests that should be matched first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "LDAY").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a request.
    fn evaluate(&self, request: &ServiceRequest) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
