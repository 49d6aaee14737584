//! Filter implementations for the creator pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod attributes;
pub mod content_type;
pub mod price_bucket;
pub mod search;

// Re-export for convenience
pub use attributes::{AttributesFilter, attributes_pass};
pub use content_type::{ContentTypeFilter, content_type_passes};
pub use price_bucket::PriceBucketFilter;
pub use search::{SearchFilter, tokenize};
