//! # Catalog Crate
//!
//! Data model and inputs for the creator marketplace.
//!
//! ## Main Components
//!
//! - **types**: The `Creator` record as supplied by the feed
//! - **feed**: `CreatorFeed`, the Loading/Loaded view of the data source
//! - **parser**: Load creator feeds from JSON files or shard directories
//! - **config**: Price buckets and curated facet defaults
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{load_creators, CreatorFeed, MarketplaceConfig};
//! use std::path::Path;
//!
//! let config = MarketplaceConfig::default();
//! let creators = load_creators(Path::new("data/creators.json"))?;
//! let feed = CreatorFeed::Loaded(creators);
//! ```

// Public modules
pub mod config;
pub mod error;
pub mod feed;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use config::{
    ALL_CONTENT_TYPES, ANY_PRICE_BUCKET, DEFAULT_ATTRIBUTES, DEFAULT_CONTENT_TYPES,
    MarketplaceConfig, PriceBucket,
};
pub use error::{CatalogError, Result};
pub use feed::CreatorFeed;
pub use parser::load_creators;
pub use types::{Creator, CreatorStats};
