//! Filter to keep creators offering the selected content type.

use crate::state::FilterState;
use crate::traits::Filter;
use catalog::{ALL_CONTENT_TYPES, Creator};

/// `"all"` passes everything; any other key must appear verbatim in the
/// creator's content types.
pub fn content_type_passes(creator: &Creator, key: &str) -> bool {
    key == ALL_CONTENT_TYPES || creator.content_types.iter().any(|t| t == key)
}

/// Keeps creators offering the state's content type (exact match).
pub struct ContentTypeFilter;

impl Filter for ContentTypeFilter {
    fn name(&self) -> &str {
        "ContentTypeFilter"
    }

    fn apply<'a>(&self, creators: Vec<&'a Creator>, state: &FilterState) -> Vec<&'a Creator> {
        let key = state.content_type_key();
        if key == ALL_CONTENT_TYPES {
            return creators;
        }
        creators
            .into_iter()
            .filter(|creator| content_type_passes(creator, key))
            .collect()
    }
}
