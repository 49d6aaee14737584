//! Facet option lists derived from the loaded creators.
//!
//! The content type and attribute pickers show the curated defaults first,
//! followed by any extra values the feed actually uses. Options depend only
//! on the creator list, never on the filter state, so callers recompute them
//! when the feed changes and reuse them otherwise.

use catalog::{Creator, MarketplaceConfig};
use std::collections::HashSet;

/// Merge curated defaults with values found in the data.
///
/// ## Algorithm
/// 1. Start with `defaults`, in their configured order
/// 2. Scan creators in list order, and each creator's values in order
/// 3. Append each value not seen yet; the first occurrence wins
///
/// With no creators the result equals `defaults`.
pub fn resolve<F>(defaults: &[String], creators: &[Creator], extract: F) -> Vec<String>
where
    F: Fn(&Creator) -> &[String],
{
    let mut options: Vec<String> = defaults.to_vec();
    let mut seen: HashSet<&str> = defaults.iter().map(String::as_str).collect();

    for creator in creators {
        for value in extract(creator) {
            if seen.insert(value.as_str()) {
                options.push(value.clone());
            }
        }
    }
    options
}

fn content_types_of(creator: &Creator) -> &[String] {
    &creator.content_types
}

fn attributes_of(creator: &Creator) -> &[String] {
    &creator.attributes
}

/// Content type options: configured defaults plus extras from the feed.
pub fn content_type_options(config: &MarketplaceConfig, creators: &[Creator]) -> Vec<String> {
    resolve(&config.content_types, creators, content_types_of)
}

/// Attribute options: configured defaults plus extras from the feed.
pub fn attribute_options(config: &MarketplaceConfig, creators: &[Creator]) -> Vec<String> {
    resolve(&config.attributes, creators, attributes_of)
}

/// Both option lists for one creator list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub content_types: Vec<String>,
    pub attributes: Vec<String>,
}

impl FacetOptions {
    pub fn resolve(config: &MarketplaceConfig, creators: &[Creator]) -> Self {
        let options = Self {
            content_types: content_type_options(config, creators),
            attributes: attribute_options(config, creators),
        };
        tracing::debug!(
            "Resolved facet options: {} content types ({} extra), {} attributes ({} extra)",
            options.content_types.len(),
            options.content_types.len() - config.content_types.len(),
            options.attributes.len(),
            options.attributes.len() - config.attributes.len()
        );
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn tagged(attributes: &[&str]) -> Creator {
        Creator {
            attributes: strings(attributes),
            ..Default::default()
        }
    }

    #[test]
    fn test_extras_follow_defaults() {
        let defaults = strings(&["A", "B"]);
        let creators = vec![tagged(&["B", "C"]), tagged(&["D"])];

        let options = resolve(&defaults, &creators, |c| c.attributes.as_slice());
        assert_eq!(options, strings(&["A", "B", "C", "D"]));
    }

    #[test]
    fn test_no_creators_yields_defaults() {
        let defaults = strings(&["A", "B"]);
        assert_eq!(resolve(&defaults, &[], |c| c.attributes.as_slice()), defaults);
    }

    #[test]
    fn test_first_encounter_order_without_duplicates() {
        let defaults = strings(&["A"]);
        let creators = vec![
            tagged(&["Z", "A", "Y"]),
            tagged(&["Y", "X", "Z"]),
            tagged(&[]),
            tagged(&["X", "W"]),
        ];

        let options = resolve(&defaults, &creators, |c| c.attributes.as_slice());
        assert_eq!(options, strings(&["A", "Z", "Y", "X", "W"]));
    }

    #[test]
    fn test_repeated_resolution_is_stable() {
        let config = MarketplaceConfig::default();
        let creators = vec![tagged(&["Travel", "AI"])];

        let first = FacetOptions::resolve(&config, &creators);
        let second = FacetOptions::resolve(&config, &creators);
        assert_eq!(first, second);
        assert_eq!(first.attributes.last().map(String::as_str), Some("Travel"));
        assert_eq!(first.attributes.len(), config.attributes.len() + 1);
    }

    #[test]
    fn test_content_types_use_their_own_defaults() {
        let config = MarketplaceConfig::default();
        let creators = vec![Creator {
            content_types: strings(&["Webinar", "Story"]),
            attributes: strings(&["Webinar"]),
            ..Default::default()
        }];

        let content_types = content_type_options(&config, &creators);
        assert_eq!(content_types.len(), config.content_types.len() + 1);
        assert_eq!(content_types.last().map(String::as_str), Some("Webinar"));

        let attributes = attribute_options(&config, &creators);
        assert_eq!(attributes.last().map(String::as_str), Some("Webinar"));
    }
}
