//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Deadline**: LDAY
//! - **Scarcity**: SCARCE
//! - **Flexibility**: WIDTH
//!
//! # Score Convention
//! All rules return lower scores for higher priority requests.

use super::{DispatchingRule, RuleScore};
use crate::models::ServiceRequest;

/// Latest eligible day.
///
/// Prioritizes requests whose window closes first. The matcher's
/// day-by-day analogue of Earliest Due Date.
///
/// # Reference
/// Jackson (1955), optimal for minimizing maximum lateness on single machine.
#[derive(Debug, Clone, Copy)]
pub struct LatestDay;

impl DispatchingRule for LatestDay {
    fn name(&self) -> &'static str {
        "LDAY"
    }

    fn evaluate(&self, request: &ServiceRequest) -> RuleScore {
        request.last_day as f64
    }

    fn description(&self) -> &'static str {
        "Latest Eligible Day"
    }
}

/// Provider scarcity.
///
/// Prioritizes requests whose category is offered by a smaller share of
/// all providers, since they have fewer alternatives.
#[derive(Debug, Clone, Copy)]
pub struct ProviderScarcity;

impl DispatchingRule for ProviderScarcity {
    fn name(&self) -> &'static str {
        "SCARCE"
    }

    fn evaluate(&self, request: &ServiceRequest) -> RuleScore {
        request.provider_ratio
    }

    fn description(&self) -> &'static str {
        "Provider Scarcity"
    }
}

/// Window width.
///
/// Prioritizes requests with fewer eligible days.
#[derive(Debug, Clone, Copy)]
pub struct WindowWidth;

impl DispatchingRule for WindowWidth {
    fn name(&self) -> &'static str {
        "WIDTH"
    }

    fn evaluate(&self, request: &ServiceRequest) -> RuleScore {
        request.window_len() as f64
    }

    fn description(&self) -> &'static str {
        "Window Width"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DaySpec;

    #[test]
    fn test_latest_day() {
        let early = ServiceRequest::new("a", "x", DaySpec::Range { first: 1, last: 3 });
        let late = ServiceRequest::new("b", "x", DaySpec::Single(9));
        assert!(LatestDay.evaluate(&early) < LatestDay.evaluate(&late));
    }

    #[test]
    fn test_provider_scarcity() {
        let rare = ServiceRequest::new("a", "x", DaySpec::Single(1)).with_provider_ratio(0.1);
        let common = ServiceRequest::new("b", "y", DaySpec::Single(1)).with_provider_ratio(0.9);
        assert!(ProviderScarcity.evaluate(&rare) < ProviderScarcity.evaluate(&common));
    }

    #[test]
    fn test_window_width() {
        let narrow = ServiceRequest::new("a", "x", DaySpec::Single(4));
        let wide = ServiceRequest::new("b", "x", DaySpec::Range { first: 1, last: 4 });
        assert!((WindowWidth.evaluate(&narrow) - 1.0).abs() < 1e-10);
        assert!((WindowWidth.evaluate(&wide) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(LatestDay.name(), "LDAY");
        assert_eq!(ProviderScarcity.description(), "Provider Scarcity");
        assert_eq!(WindowWidth.name(), "WIDTH");
    }
}
