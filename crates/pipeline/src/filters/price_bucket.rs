//! Filter on a creator's starting price.
//!
//! The state names a bucket by key; the bucket table comes from the
//! marketplace configuration.

use crate::state::FilterState;
use crate::traits::Filter;
use catalog::{Creator, MarketplaceConfig, PriceBucket};
use std::sync::Arc;

/// Check a creator's starting price against a bucket's inclusive bounds.
pub fn passes(creator: &Creator, bucket: &PriceBucket) -> bool {
    bucket.contains(creator.starting_price)
}

/// Keeps creators whose starting price falls in the selected bucket.
///
/// ## Algorithm
/// 1. Look up the state's bucket key in the table
/// 2. Unbounded or unknown bucket: keep everything
/// 3. Otherwise keep creators with `min <= price <= max`
pub struct PriceBucketFilter {
    config: Arc<MarketplaceConfig>,
}

impl PriceBucketFilter {
    /// Create a new PriceBucketFilter.
    ///
    /// # Arguments
    /// * `config` - Shared configuration holding the bucket table
    pub fn new(config: Arc<MarketplaceConfig>) -> Self {
        Self { config }
    }
}

impl Filter for PriceBucketFilter {
    fn name(&self) -> &str {
        "PriceBucketFilter"
    }

    fn apply<'a>(&self, creators: Vec<&'a Creator>, state: &FilterState) -> Vec<&'a Creator> {
        let Some(bucket) = self.config.price_bucket(state.price_bucket_key()) else {
            tracing::debug!(
                "Unknown price bucket '{}', not filtering on price",
                state.price_bucket_key()
            );
            return creators;
        };
        if bucket.is_unbounded() {
            return creators;
        }
        creators
            .into_iter()
            .filter(|creator| passes(creator, bucket))
            .collect()
    }
}
