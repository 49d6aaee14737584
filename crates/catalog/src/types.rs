//! Core domain types for the creator marketplace.
//!
//! A [`Creator`] is supplied by an external feed and is read-only to the
//! filtering core. Feeds are often partial, so every collection field
//! deserializes to an empty list when it is missing or `null`.

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Creator
// =============================================================================

/// A creator profile as it appears in the marketplace listing.
///
/// Field names follow the feed's camelCase JSON (`startingPrice`,
/// `contentTypes`, `avatarUrl`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    /// Record id assigned by the feed, when it has one
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    // Identity strings may be empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub handle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tagline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar_url: String,

    /// Lowest price the creator quotes, in whole currency units
    pub starting_price: f64,

    /// Content formats offered, in the creator's own order
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_types: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platforms: Vec<String>,
    /// Niche/audience tags, in the creator's own order
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: CreatorStats,

    #[serde(default)]
    pub response_time_hours: u32,
    #[serde(default)]
    pub turnaround_days: u32,
    #[serde(default)]
    pub next_available_days: u32,

    /// Absent or `null` in the feed means not verified
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: bool,
}

impl Creator {
    /// Stable identity for presentation lists: the record id, or the handle
    /// when the feed did not assign one.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.handle)
    }
}

/// Audience statistics reported for a creator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatorStats {
    pub audience_size: u64,
    pub avg_views: u64,
    /// Percentage in `[0, 100]`
    pub engagement_rate: f64,
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_deserializes() {
        let json = r#"{
            "_id": "c1",
            "name": "Maya Chen",
            "handle": "@mayabuilds",
            "location": "Austin, TX",
            "tagline": "Founder stories for B2B SaaS",
            "avatarUrl": "https://example.com/maya.jpg",
            "startingPrice": 450,
            "contentTypes": ["Short-form video", "Founder story"],
            "platforms": ["TikTok", "LinkedIn"],
            "attributes": ["B2B", "SaaS"],
            "stats": { "audienceSize": 120000, "avgViews": 18000, "engagementRate": 4.2 },
            "responseTimeHours": 6,
            "turnaroundDays": 5,
            "nextAvailableDays": 3,
            "verified": true
        }"#;

        let creator: Creator = serde_json::from_str(json).unwrap();
        assert_eq!(creator.id.as_deref(), Some("c1"));
        assert_eq!(creator.starting_price, 450.0);
        assert_eq!(creator.content_types, vec!["Short-form video", "Founder story"]);
        assert_eq!(creator.stats.audience_size, 120_000);
        assert_eq!(creator.stats.engagement_rate, 4.2);
        assert_eq!(creator.next_available_days, 3);
        assert!(creator.verified);
    }

    #[test]
    fn test_missing_collections_load_as_empty() {
        let json = r#"{ "name": "Sparse", "handle": "@sparse", "startingPrice": 100 }"#;

        let creator: Creator = serde_json::from_str(json).unwrap();
        assert!(creator.content_types.is_empty());
        assert!(creator.platforms.is_empty());
        assert!(creator.attributes.is_empty());
        assert_eq!(creator.stats, CreatorStats::default());
        assert!(!creator.verified);
    }

    #[test]
    fn test_null_fields_load_as_empty() {
        let json = r#"{
            "name": "Nulls",
            "handle": "@nulls",
            "tagline": null,
            "startingPrice": 100,
            "contentTypes": null,
            "platforms": null,
            "attributes": null,
            "stats": null,
            "verified": null
        }"#;

        let creator: Creator = serde_json::from_str(json).unwrap();
        assert_eq!(creator.tagline, "");
        assert!(creator.content_types.is_empty());
        assert!(creator.platforms.is_empty());
        assert!(creator.attributes.is_empty());
        assert!(!creator.verified);
    }

    #[test]
    fn test_key_falls_back_to_handle() {
        let mut creator = Creator {
            handle: "@handle".to_string(),
            ..Default::default()
        };
        assert_eq!(creator.key(), "@handle");

        creator.id = Some("abc".to_string());
        assert_eq!(creator.key(), "abc");
    }
}
