//! Match result model.
//!
//! A match result is the outcome of one matcher run over a registry: the
//! requests that were served (with provider and day filled in) in the
//! order they were solved, plus the names of the requests left unserved.

use serde::{Deserialize, Serialize};

use super::ServiceRequest;

/// Outcome of one matcher run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Solved requests in solving order.
    pub solved: Vec<ServiceRequest>,
    /// Names of requests that were never served.
    pub unsolved: Vec<String>,
}

/// A request-provider-day assignment.
///
/// Flat view of a solved request, used for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Served request.
    pub request_id: String,
    /// Provider that served it.
    pub provider_id: String,
    /// Category of the request.
    pub category: String,
    /// Day of service.
    pub day: u32,
}

impl Assignment {
    /// Builds the assignment for a solved request.
    ///
    /// Returns `None` if the request has not been solved.
    pub fn from_request(request: &ServiceRequest) -> Option<Self> {
        Some(Self {
            request_id: request.id.clone(),
            provider_id: request.solved_by.clone()?,
            category: request.category.clone(),
            day: request.solved_day?,
        })
    }
}

impl MatchResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a solved request.
    pub fn add_solved(&mut self, request: ServiceRequest) {
        self.solved.push(request);
    }

    /// Number of solved requests.
    #[inline]
    pub fn solved_count(&self) -> usize {
        self.solved.len()
    }

    /// Whether the named request was solved.
    pub fn is_solved(&self, request_id: &str) -> bool {
        self.solved.iter().any(|r| r.id == request_id)
    }

    /// Finds the solved record for a request.
    pub fn solved_request(&self, request_id: &str) -> Option<&ServiceRequest> {
        self.solved.iter().find(|r| r.id == request_id)
    }

    /// Solved requests served on `day`.
    pub fn solved_on_day(&self, day: u32) -> Vec<&ServiceRequest> {
        self.solved
            .iter()
            .filter(|r| r.solved_day == Some(day))
            .collect()
    }

    /// Solved requests served by `provider_id`.
    pub fn solved_by_provider(&self, provider_id: &str) -> Vec<&ServiceRequest> {
        self.solved
            .iter()
            .filter(|r| r.solved_by.as_deref() == Some(provider_id))
            .collect()
    }

    /// Flat assignments in solving order.
    pub fn assignments(&self) -> Vec<Assignment> {
        self.solved
            .iter()
            .filter_map(Assignment::from_request)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DaySpec;

    fn solved(id: &str, provider: &str, day: u32) -> ServiceRequest {
        let mut r = ServiceRequest::new(id, "x", DaySpec::Range { first: 1, last: 5 });
        r.mark_solved(provider, day);
        r
    }

    fn sample_result() -> MatchResult {
        let mut m = MatchResult::new();
        m.add_solved(solved("r1", "A", 1));
        m.add_solved(solved("r2", "B", 1));
        m.add_solved(solved("r3", "A", 2));
        m.unsolved.push("r4".into());
        m
    }

    #[test]
    fn test_solved_count() {
        let m = sample_result();
        assert_eq!(m.solved_count(), 3);
        assert!(m.is_solved("r1"));
        assert!(!m.is_solved("r4"));
    }

    #[test]
    fn test_solved_on_day() {
        let m = sample_result();
        assert_eq!(m.solved_on_day(1).len(), 2);
        assert_eq!(m.solved_on_day(2).len(), 1);
        assert!(m.solved_on_day(3).is_empty());
    }

    #[test]
    fn test_solved_by_provider() {
        let m = sample_result();
        assert_eq!(m.solved_by_provider("A").len(), 2);
        assert_eq!(m.solved_by_provider("B").len(), 1);
        assert!(m.solved_by_provider("C").is_empty());
    }

    #[test]
    fn test_assignments_view() {
        let m = sample_result();
        let a = m.assignments();
        assert_eq!(a.len(), 3);
        assert_eq!(a[2].request_id, "r3");
        assert_eq!(a[2].provider_id, "A");
        assert_eq!(a[2].day, 2);
        assert_eq!(a[2].category, "x");
    }

    #[test]
    fn test_assignment_requires_solved_request() {
        let r = ServiceRequest::new("r1", "x", DaySpec::Single(1));
        assert!(Assignment::from_request(&r).is_none());
    }

    #[test]
    fn test_empty_result() {
        let m = MatchResult::new();
        assert_eq!(m.solved_count(), 0);
        assert!(m.assignments().is_empty());
        assert!(m.solved_request("r1").is_none());
    }
}
