//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a creator listing.

use crate::state::FilterState;
use catalog::Creator;

/// Core trait for filtering creators.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared across threads
/// - Filters take ownership of a Vec of borrowed creators and return the
///   survivors, so chaining filters never clones a `Creator`
/// - Filters must keep survivors in their input order
/// - Filtering is total: there is no error path
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of creators.
    ///
    /// # Arguments
    /// * `creators` - The creators still in the running (takes ownership)
    /// * `state` - The buyer's current selections
    ///
    /// # Returns
    /// The creators that pass, in input order
    fn apply<'a>(&self, creators: Vec<&'a Creator>, state: &FilterState) -> Vec<&'a Creator>;
}
