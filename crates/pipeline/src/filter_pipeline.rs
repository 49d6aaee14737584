//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{AttributesFilter, ContentTypeFilter, PriceBucketFilter, SearchFilter};
use crate::state::FilterState;
use crate::traits::Filter;
use catalog::{Creator, MarketplaceConfig};
use std::sync::Arc;

/// Chains multiple filters together into a processing pipeline.
///
/// Every filter keeps survivors in input order, so running them in sequence
/// gives exactly the creators that pass all of them, in listing order.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::standard(config.clone());
/// let visible = pipeline.apply(&creators, &state);
/// println!("{} matches", visible.len());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The marketplace's filter chain: search, price, content type,
    /// then attributes.
    pub fn standard(config: Arc<MarketplaceConfig>) -> Self {
        Self::new()
            .add_filter(SearchFilter)
            .add_filter(PriceBucketFilter::new(config))
            .add_filter(ContentTypeFilter)
            .add_filter(AttributesFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the creators.
    ///
    /// ## Algorithm
    /// 1. Start with every creator, borrowed, in listing order
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return the survivors
    ///
    /// Neither `creators` nor `state` is modified, so this can be re-run on
    /// every state change.
    pub fn apply<'a>(&self, creators: &'a [Creator], state: &FilterState) -> Vec<&'a Creator> {
        let mut current: Vec<&'a Creator> = creators.iter().collect();
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, state);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Like [`FilterPipeline::apply`], but returns owned copies.
    pub fn apply_owned(&self, creators: &[Creator], state: &FilterState) -> Vec<Creator> {
        self.apply(creators, state).into_iter().cloned().collect()
    }

    /// Number of creators passing every filter.
    pub fn count(&self, creators: &[Creator], state: &FilterState) -> usize {
        self.apply(creators, state).len()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
