//! Filter to keep creators carrying every active attribute.
//!
//! Active attributes combine with AND: a creator must have all of them,
//! not just one.

use crate::state::FilterState;
use crate::traits::Filter;
use catalog::Creator;
use std::collections::BTreeSet;

/// Subset test: every active attribute must be one of the creator's.
pub fn attributes_pass(creator: &Creator, active: &BTreeSet<String>) -> bool {
    active
        .iter()
        .all(|attribute| creator.attributes.contains(attribute))
}

/// Keeps creators whose attributes include all of the active ones.
///
/// ## Algorithm
/// Creator attribute lists are short, so membership is a linear scan
/// of each creator's list per active attribute.
pub struct AttributesFilter;

impl Filter for AttributesFilter {
    fn name(&self) -> &str {
        "AttributesFilter"
    }

    fn apply<'a>(&self, creators: Vec<&'a Creator>, state: &FilterState) -> Vec<&'a Creator> {
        let active = state.active_attributes();
        if active.is_empty() {
            return creators;
        }
        creators
            .into_iter()
            .filter(|creator| attributes_pass(creator, active))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(name: &str, attributes: &[&str]) -> Creator {
        Creator {
            name: name.to_string(),
            attributes: attributes.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_active_set_passes() {
        assert!(attributes_pass(&Creator::default(), &BTreeSet::new()));
    }

    #[test]
    fn test_all_active_attributes_required() {
        let partial = tagged("partial", &["B2B"]);
        let full = tagged("full", &["B2B", "AI", "SaaS"]);

        let state = FilterState::new().with_attribute("B2B").with_attribute("AI");
        let filtered = AttributesFilter.apply(vec![&partial, &full], &state);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "full");
    }

    #[test]
    fn test_missing_attributes_never_match_active() {
        let bare = tagged("bare", &[]);
        let state = FilterState::new().with_attribute("Gaming");

        assert!(AttributesFilter.apply(vec![&bare], &state).is_empty());
    }
}
