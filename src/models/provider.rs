//! Provider model.
//!
//! Providers are the entities that serve requests: each offers one or
//! more service categories and can serve at most one request per day.

use serde::{Deserialize, Serialize};

/// A service provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Unique provider identifier.
    pub id: String,
    /// Categories the provider offers.
    ///
    /// Multiset: a category declared twice appears twice.
    pub categories: Vec<String>,
}

impl Provider {
    /// Creates a provider with no categories.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            categories: Vec::new(),
        }
    }

    /// Adds a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    /// Whether the provider offers `category`.
    pub fn offers(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// How many times `category` was declared for this provider.
    pub fn multiplicity(&self, category: &str) -> usize {
        self.categories.iter().filter(|c| *c == category).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_builder() {
        let p = Provider::new("A").with_category("x").with_category("y");
        assert_eq!(p.id, "A");
        assert!(p.offers("x"));
        assert!(p.offers("y"));
        assert!(!p.offers("z"));
    }

    #[test]
    fn test_duplicate_categories_are_kept() {
        let p = Provider::new("A").with_category("x").with_category("x");
        assert_eq!(p.categories.len(), 2);
        assert_eq!(p.multiplicity("x"), 2);
        assert_eq!(p.multiplicity("y"), 0);
    }
}
