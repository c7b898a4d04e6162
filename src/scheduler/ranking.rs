//! Daily provider ranking.
//!
//! Each pending request of the day adds one unit of demand to every
//! provider listed for its category (duplicate listings count again).
//! Providers are then tried in ascending demand order, so that providers
//! few of today's requests can use are consumed before the broadly useful
//! ones. This spreads load; it does not guarantee a maximum matching.

use std::collections::HashMap;

use crate::models::{Registry, ServiceRequest};

/// Demand per provider, in order of first appearance.
///
/// Providers with no demand today are absent.
pub fn demand_counts<'a, 'r, I>(registry: &'a Registry, day_requests: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'r ServiceRequest>,
{
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    let mut position: HashMap<&'a str, usize> = HashMap::new();

    for request in day_requests {
        for provider in registry.providers_for(&request.category) {
            let provider = provider.as_str();
            match position.get(provider) {
                Some(&idx) => counts[idx].1 += 1,
                None => {
                    position.insert(provider, counts.len());
                    counts.push((provider, 1));
                }
            }
        }
    }

    counts
}

/// Providers relevant to `day_requests`, lowest demand first.
///
/// Equal demand keeps first-appearance order.
pub fn rank_providers<'a, 'r, I>(registry: &'a Registry, day_requests: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'r ServiceRequest>,
{
    let mut counts = demand_counts(registry, day_requests);
    counts.sort_by_key(|&(_, demand)| demand);
    counts.into_iter().map(|(provider, _)| provider).collect()
}
