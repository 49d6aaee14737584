//! Filtering and faceting for the creator marketplace listing.
//!
//! This crate provides:
//! - Filter trait and implementations for narrowing the creator list
//! - FilterPipeline for composing filters
//! - FilterState for the buyer's current selections
//! - Facet option resolution from curated defaults plus feed data
//!
//! ## Architecture
//! Each buyer action updates the FilterState, then the whole list is
//! re-evaluated:
//! 1. SearchFilter keeps creators matching every query token
//! 2. PriceBucketFilter keeps creators inside the selected bucket
//! 3. ContentTypeFilter keeps creators offering the selected type
//! 4. AttributesFilter keeps creators carrying every active attribute
//!
//! Facet options are derived from the creator list alone and only need
//! recomputing when the list changes.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FacetOptions, FilterPipeline, FilterState};
//!
//! let pipeline = FilterPipeline::standard(config.clone());
//! let options = FacetOptions::resolve(&config, &creators);
//!
//! let mut state = FilterState::new();
//! state.set_search_query("founder video");
//! state.toggle_attribute("B2B");
//!
//! let visible = pipeline.apply(&creators, &state);
//! ```

pub mod facets;
pub mod filter_pipeline;
pub mod filters;
pub mod state;
pub mod traits;

// Re-export main types
pub use facets::FacetOptions;
pub use filter_pipeline::FilterPipeline;
pub use state::FilterState;
pub use traits::Filter;
