//! Greedy matcher and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyMatcher` walks the horizon one day at a time, serving pending
//! requests in deadline/scarcity order from a demand-ranked provider pool.
//! It is not optimal, but deterministic and fast.
//!
//! # KPI
//!
//! `MatchKpi` computes fulfillment, per-day throughput, and provider
//! utilization.

mod greedy;
mod kpi;
mod ranking;

pub use greedy::{GreedyMatcher, MatchConfig, DEFAULT_HORIZON_DAYS};
pub use kpi::MatchKpi;
pub use ranking::{demand_counts, rank_providers};
