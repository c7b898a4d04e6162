//! Problem-instance registry.
//!
//! Holds the three relations a matcher run works from:
//! category → providers, provider → categories, and request name → request.
//!
//! Membership is a multiset on both sides: repeating a `service`
//! declaration appends again instead of deduplicating, which raises that
//! provider's weight in the daily demand ranking.
//!
//! Providers and requests keep their first-declaration order, so every
//! iteration over the registry is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{DaySpec, Provider, ServiceRequest};

/// Declarations collected for one problem instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    categories: HashMap<String, Vec<String>>,
    providers: Vec<Provider>,
    provider_index: HashMap<String, usize>,
    requests: Vec<ServiceRequest>,
    request_index: HashMap<String, usize>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `provider` offers every category in `categories`.
    ///
    /// A provider declared twice accumulates both category lists.
    pub fn add_service<I, S>(&mut self, provider: &str, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let idx = match self.provider_index.get(provider) {
            Some(&idx) => idx,
            None => {
                self.providers.push(Provider::new(provider));
                let idx = self.providers.len() - 1;
                self.provider_index.insert(provider.to_string(), idx);
                idx
            }
        };

        for category in categories {
            let category = category.into();
            self.categories
                .entry(category.clone())
                .or_default()
                .push(provider.to_string());
            self.providers[idx].categories.push(category);
        }
    }

    /// Stores a request, replacing any earlier request with the same name.
    ///
    /// A replaced request keeps the position of the first declaration.
    pub fn add_request(&mut self, name: &str, category: &str, days: DaySpec) {
        let request = ServiceRequest::new(name, category, days);
        match self.request_index.get(name) {
            Some(&idx) => self.requests[idx] = request,
            None => {
                self.requests.push(request);
                self.request_index
                    .insert(name.to_string(), self.requests.len() - 1);
            }
        }
    }

    /// Whether a matcher run has anything to do.
    #[inline]
    pub fn is_schedulable(&self) -> bool {
        !self.providers.is_empty() && !self.requests.is_empty()
    }

    /// Number of distinct providers.
    #[inline]
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Number of distinct request names.
    #[inline]
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    /// Providers offering `category`, one entry per declaration.
    pub fn providers_for(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Categories offered by `provider`, one entry per declaration.
    pub fn categories_of(&self, provider: &str) -> &[String] {
        self.provider(provider)
            .map(|p| p.categories.as_slice())
            .unwrap_or(&[])
    }

    /// Looks up a provider.
    pub fn provider(&self, id: &str) -> Option<&Provider> {
        self.provider_index.get(id).map(|&idx| &self.providers[idx])
    }

    /// All providers in first-declaration order.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Provider identifiers in first-declaration order.
    pub fn provider_ids(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|p| p.id.as_str())
    }

    /// Looks up a request.
    pub fn request(&self, name: &str) -> Option<&ServiceRequest> {
        self.request_index.get(name).map(|&idx| &self.requests[idx])
    }

    /// All requests in first-declaration order.
    pub fn requests(&self) -> &[ServiceRequest] {
        &self.requests
    }
}
