//! The buyer's current filter selections.
//!
//! A `FilterState` lives for one browsing session. It starts at the
//! defaults, changes only through the discrete actions below, and is never
//! persisted.

use catalog::{ALL_CONTENT_TYPES, ANY_PRICE_BUCKET};
use std::collections::BTreeSet;

/// Query, price bucket, content type and active attribute selections.
///
/// Active attributes are a set: toggling is membership-based and the
/// order in which attributes were picked carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search_query: String,
    price_bucket_key: String,
    content_type_key: String,
    active_attributes: BTreeSet<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            price_bucket_key: ANY_PRICE_BUCKET.to_string(),
            content_type_key: ALL_CONTENT_TYPES.to_string(),
            active_attributes: BTreeSet::new(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query (builder form)
    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.set_search_query(query);
        self
    }

    /// Set the price bucket key (builder form)
    pub fn with_price_bucket(mut self, key: impl Into<String>) -> Self {
        self.set_price_bucket_key(key);
        self
    }

    /// Set the content type key (builder form)
    pub fn with_content_type(mut self, key: impl Into<String>) -> Self {
        self.set_content_type_key(key);
        self
    }

    /// Activate an attribute (builder form). Unlike `toggle_attribute`,
    /// an already active attribute stays active.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.active_attributes.insert(attribute.into());
        self
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn price_bucket_key(&self) -> &str {
        &self.price_bucket_key
    }

    pub fn content_type_key(&self) -> &str {
        &self.content_type_key
    }

    pub fn active_attributes(&self) -> &BTreeSet<String> {
        &self.active_attributes
    }

    pub fn is_attribute_active(&self, attribute: &str) -> bool {
        self.active_attributes.contains(attribute)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Select a price bucket. The key is not checked against a bucket
    /// table here; callers holding the table validate it first.
    pub fn set_price_bucket_key(&mut self, key: impl Into<String>) {
        self.price_bucket_key = key.into();
    }

    /// Select a content type, or `"all"` for no constraint.
    pub fn set_content_type_key(&mut self, key: impl Into<String>) {
        self.content_type_key = key.into();
    }

    /// Flip an attribute's membership in the active set.
    ///
    /// Returns `true` if the attribute is active afterwards.
    pub fn toggle_attribute(&mut self, attribute: &str) -> bool {
        if self.active_attributes.remove(attribute) {
            false
        } else {
            self.active_attributes.insert(attribute.to_string());
            true
        }
    }

    /// Reset every selection to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when any selection differs from its default.
    ///
    /// A whitespace-only query does not count as a filter.
    pub fn has_active_filters(&self) -> bool {
        !self.search_query.trim().is_empty()
            || self.price_bucket_key != ANY_PRICE_BUCKET
            || self.content_type_key != ALL_CONTENT_TYPES
            || !self.active_attributes.is_empty()
    }
}
