//! Service request model.
//!
//! A request asks for one category of service on a single day or on any
//! day of an inclusive range. Scheduling metadata (`last_day`,
//! `provider_ratio`) is derived; `solved_by`/`solved_day` are the only
//! fields written after parsing, and only once.

use serde::{Deserialize, Serialize};

use crate::validation::{parse_day_spec, DaySpecError};

/// The days on which a request may be served.
///
/// Days are 1-based positions inside the planning horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaySpec {
    /// Exactly one day.
    Single(u32),
    /// Every day from `first` to `last`, both inclusive.
    Range {
        /// First eligible day.
        first: u32,
        /// Last eligible day.
        last: u32,
    },
}

impl DaySpec {
    /// Parses `D` or `D1-D2`, every day within `1..=horizon`.
    pub fn parse(token: &str, horizon: u32) -> Result<Self, DaySpecError> {
        parse_day_spec(token, horizon)
    }

    /// Expands into an explicit, strictly increasing day list.
    pub fn days(&self) -> Vec<u32> {
        match *self {
            DaySpec::Single(day) => vec![day],
            DaySpec::Range { first, last } => (first..=last).collect(),
        }
    }

    /// First eligible day.
    #[inline]
    pub fn first_day(&self) -> u32 {
        match *self {
            DaySpec::Single(day) => day,
            DaySpec::Range { first, .. } => first,
        }
    }

    /// Last eligible day.
    #[inline]
    pub fn last_day(&self) -> u32 {
        match *self {
            DaySpec::Single(day) => day,
            DaySpec::Range { last, .. } => last,
        }
    }
}

/// A unit of demand for one service category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// Request name (unique within a registry).
    pub id: String,
    /// Category the request needs.
    pub category: String,
    /// Eligible days, strictly increasing.
    pub days: Vec<u32>,
    /// Largest element of `days`.
    pub last_day: u32,
    /// Fraction of all providers offering `category`.
    ///
    /// Zero until a matcher run fills it in.
    pub provider_ratio: f64,
    /// Provider that served the request.
    pub solved_by: Option<String>,
    /// Day the request was served.
    pub solved_day: Option<u32>,
}

impl ServiceRequest {
    /// Creates an unsolved request.
    pub fn new(id: impl Into<String>, category: impl Into<String>, days: DaySpec) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            days: days.days(),
            last_day: days.last_day(),
            provider_ratio: 0.0,
            solved_by: None,
            solved_day: None,
        }
    }

    /// Sets the provider ratio.
    pub fn with_provider_ratio(mut self, ratio: f64) -> Self {
        self.provider_ratio = ratio;
        self
    }

    /// Whether the request may be served on `day`.
    #[inline]
    pub fn is_eligible_on(&self, day: u32) -> bool {
        self.days.binary_search(&day).is_ok()
    }

    /// Number of eligible days.
    #[inline]
    pub fn window_len(&self) -> usize {
        self.days.len()
    }

    /// Whether a provider has been recorded for this request.
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.solved_by.is_some()
    }

    /// Records the provider and day that served the request.
    ///
    /// Returns `false` and leaves the request untouched if it was already
    /// solved.
    pub fn mark_solved(&mut self, provider_id: impl Into<String>, day: u32) -> bool {
        if self.is_solved() {
            return false;
        }
        self.solved_by = Some(provider_id.into());
        self.solved_day = Some(day);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_day_spec() {
        let spec = DaySpec::Single(7);
        assert_eq!(spec.days(), vec![7]);
        assert_eq!(spec.first_day(), 7);
        assert_eq!(spec.last_day(), 7);
    }

    #[test]
    fn test_range_day_spec_is_inclusive() {
        let spec = DaySpec::Range { first: 3, last: 6 };
        assert_eq!(spec.days(), vec![3, 4, 5, 6]);
        assert_eq!(spec.last_day(), 6);
    }

    #[test]
    fn test_parse_day_spec() {
        assert_eq!(DaySpec::parse("20", 20), Ok(DaySpec::Single(20)));
        assert_eq!(
            DaySpec::parse("1-3", 20),
            Ok(DaySpec::Range { first: 1, last: 3 })
        );
        assert_eq!(
            DaySpec::parse("5-3", 20),
            Err(DaySpecError::Reversed { first: 5, last: 3 })
        );
        assert!(DaySpec::parse("21", 20).is_err());
    }

    #[test]
    fn test_request_builder() {
        let r = ServiceRequest::new("r1", "plumbing", DaySpec::Range { first: 2, last: 4 })
            .with_provider_ratio(0.25);

        assert_eq!(r.id, "r1");
        assert_eq!(r.category, "plumbing");
        assert_eq!(r.last_day, 4);
        assert_eq!(r.window_len(), 3);
        assert!((r.provider_ratio - 0.25).abs() < 1e-10);
        assert!(!r.is_solved());
    }

    #[test]
    fn test_eligibility() {
        let r = ServiceRequest::new("r1", "x", DaySpec::Range { first: 2, last: 4 });
        assert!(!r.is_eligible_on(1));
        assert!(r.is_eligible_on(2));
        assert!(r.is_eligible_on(4));
        assert!(!r.is_eligible_on(5));
    }

    #[test]
    fn test_mark_solved_only_once() {
        let mut r = ServiceRequest::new("r1", "x", DaySpec::Single(3));
        assert!(r.mark_solved("A", 3));
        assert!(!r.mark_solved("B", 3));
        assert_eq!(r.solved_by.as_deref(), Some("A"));
        assert_eq!(r.solved_day, Some(3));
    }
}
