//! Free-text search over a creator's visible fields.
//!
//! Matching is case-insensitive substring containment, not word matching:
//! the token "art" matches "smart". Every token must be found (AND).

use crate::state::FilterState;
use crate::traits::Filter;
use catalog::Creator;

/// Split a query into lower-cased tokens on runs of whitespace.
///
/// An empty or whitespace-only query yields no tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Build the lower-cased text a query is matched against.
///
/// Fields that are empty contribute nothing, so no stray separators end up
/// in the haystack.
pub fn haystack(creator: &Creator) -> String {
    let platforms = creator.platforms.join(" ");
    let content_types = creator.content_types.join(" ");
    let attributes = creator.attributes.join(" ");

    let parts = [
        creator.name.as_str(),
        creator.handle.as_str(),
        creator.location.as_str(),
        creator.tagline.as_str(),
        platforms.as_str(),
        content_types.as_str(),
        attributes.as_str(),
    ];

    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Check whether every token occurs somewhere in the creator's haystack.
///
/// No tokens means no constraint.
pub fn matches(creator: &Creator, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }
    let haystack = haystack(creator);
    tokens.iter().all(|token| haystack.contains(token.as_str()))
}

/// Keeps creators matching the state's search query.
///
/// ## Algorithm
/// 1. Tokenize the query once per apply
/// 2. Skip the scan entirely if there are no tokens
/// 3. Keep creators whose haystack contains every token
pub struct SearchFilter;

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply<'a>(&self, creators: Vec<&'a Creator>, state: &FilterState) -> Vec<&'a Creator> {
        let tokens = tokenize(state.search_query());
        if tokens.is_empty() {
            return creators;
        }
        creators
            .into_iter()
            .filter(|creator| matches(creator, &tokens))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creator(name: &str, handle: &str, tagline: &str) -> Creator {
        Creator {
            name: name.to_string(),
            handle: handle.to_string(),
            tagline: tagline.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  Design   STUDIO \t"), vec!["design", "studio"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn test_haystack_skips_empty_fields() {
        let mut c = creator("Ada", "", "");
        c.platforms = vec!["YouTube".to_string(), "X".to_string()];
        c.attributes = vec!["AI".to_string()];

        assert_eq!(haystack(&c), "ada youtube x ai");
    }

    #[test]
    fn test_empty_tokens_match_anything() {
        assert!(matches(&Creator::default(), &[]));
    }

    #[test]
    fn test_tokens_are_anded_substrings() {
        let c = creator("Priya", "@anything", "Studio design partner");

        assert!(matches(&c, &tokenize("design  studio")));
        assert!(matches(&c, &tokenize("sign stu")));
        assert!(!matches(&c, &tokenize("design podcast")));
    }

    #[test]
    fn test_substring_over_matches_words() {
        let c = creator("Smart Money", "@sm", "");
        assert!(matches(&c, &tokenize("art")));
    }

    #[test]
    fn test_matches_tag_lists() {
        let mut c = creator("Sam", "@sam", "");
        c.content_types = vec!["Livestream".to_string()];
        c.platforms = vec!["Twitch".to_string()];

        assert!(matches(&c, &tokenize("twitch live")));
    }

    #[test]
    fn test_search_filter_preserves_order() {
        let a = creator("Alpha Design", "@a", "");
        let b = creator("Beta", "@b", "");
        let c = creator("Gamma", "@c", "design work");

        let mut state = FilterState::new();
        state.set_search_query("DESIGN");

        let filtered = SearchFilter.apply(vec![&a, &b, &c], &state);
        let names: Vec<&str> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Design", "Gamma"]);
    }
}
