//! Static marketplace configuration.
//!
//! The price bucket table and the two curated option lists are fixed at
//! startup. A deployment may override any of them from a JSON file; fields
//! left out of the file keep their built-in values.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Key of the price bucket that carries no bounds.
pub const ANY_PRICE_BUCKET: &str = "any";

/// Content type key meaning "no content type constraint".
pub const ALL_CONTENT_TYPES: &str = "all";

/// Curated content types, shown before any discovered in the feed.
pub const DEFAULT_CONTENT_TYPES: &[&str] = &[
    "Short-form video",
    "Long-form video",
    "Newsletter feature",
    "Podcast ad",
    "Livestream",
    "Thread",
    "Product demo",
    "Case study",
    "Founder story",
    "LinkedIn post",
    "Carousel",
    "Testimonial",
    "Community post",
    "Tutorial",
    "Unboxing",
    "Story",
];

/// Curated attribute tags, shown before any discovered in the feed.
pub const DEFAULT_ATTRIBUTES: &[&str] = &[
    "B2B",
    "SaaS",
    "AI",
    "Fintech",
    "Developer",
    "Founder-led",
    "Ecommerce",
    "Consumer",
    "Wellness",
    "Creator economy",
    "Gaming",
    "Community",
    "Podcast",
    "Live",
    "Tech",
];

/// A named price range. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBucket {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceBucket {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            min,
            max,
        }
    }

    /// True when the bucket places no constraint on price.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Check whether `price` falls inside this bucket.
    ///
    /// Adjacent buckets share their boundary value, so 250 is both
    /// "under-250" and "250-500".
    pub fn contains(&self, price: f64) -> bool {
        if self.min.is_some_and(|min| price < min) {
            return false;
        }
        if self.max.is_some_and(|max| price > max) {
            return false;
        }
        true
    }
}

/// The default bucket table.
pub fn default_price_buckets() -> Vec<PriceBucket> {
    vec![
        PriceBucket::new(ANY_PRICE_BUCKET, "Any price", None, None),
        PriceBucket::new("under-250", "Under $250", None, Some(250.0)),
        PriceBucket::new("250-500", "$250 - $500", Some(250.0), Some(500.0)),
        PriceBucket::new("500-1000", "$500 - $1k", Some(500.0), Some(1000.0)),
        PriceBucket::new("1000-plus", "$1k+", Some(1000.0), None),
    ]
}

fn default_content_types() -> Vec<String> {
    DEFAULT_CONTENT_TYPES.iter().map(|s| s.to_string()).collect()
}

fn default_attributes() -> Vec<String> {
    DEFAULT_ATTRIBUTES.iter().map(|s| s.to_string()).collect()
}

/// Price buckets plus the curated facet defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceConfig {
    #[serde(default = "default_price_buckets")]
    pub price_buckets: Vec<PriceBucket>,
    #[serde(default = "default_content_types")]
    pub content_types: Vec<String>,
    #[serde(default = "default_attributes")]
    pub attributes: Vec<String>,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            price_buckets: default_price_buckets(),
            content_types: default_content_types(),
            attributes: default_attributes(),
        }
    }
}

impl MarketplaceConfig {
    /// Parse a configuration document and validate it.
    pub fn from_json(json: &str, source: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
            file: source.to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration overrides from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json, &path.display().to_string())?;
        tracing::info!(
            "Loaded marketplace config from {} ({} price buckets)",
            path.display(),
            config.price_buckets.len()
        );
        Ok(config)
    }

    /// Look up a price bucket by key.
    pub fn price_bucket(&self, key: &str) -> Option<&PriceBucket> {
        self.price_buckets.iter().find(|bucket| bucket.key == key)
    }

    /// Check the invariants the filtering layer relies on.
    ///
    /// - bucket keys are unique
    /// - the "any" bucket exists and has no bounds
    /// - no bucket has `min > max`
    /// - neither default option list repeats an entry
    pub fn validate(&self) -> Result<()> {
        let mut keys = HashSet::new();
        for bucket in &self.price_buckets {
            if !keys.insert(bucket.key.as_str()) {
                return Err(CatalogError::InvalidConfig(format!(
                    "duplicate price bucket key '{}'",
                    bucket.key
                )));
            }
            if let (Some(min), Some(max)) = (bucket.min, bucket.max) {
                if min > max {
                    return Err(CatalogError::InvalidConfig(format!(
                        "price bucket '{}' has min {} above max {}",
                        bucket.key, min, max
                    )));
                }
            }
        }

        match self.price_bucket(ANY_PRICE_BUCKET) {
            Some(bucket) if bucket.is_unbounded() => {}
            Some(_) => {
                return Err(CatalogError::InvalidConfig(format!(
                    "price bucket '{ANY_PRICE_BUCKET}' must not have bounds"
                )));
            }
            None => {
                return Err(CatalogError::InvalidConfig(format!(
                    "missing price bucket '{ANY_PRICE_BUCKET}'"
                )));
            }
        }

        check_unique("content type", &self.content_types)?;
        check_unique("attribute", &self.attributes)?;
        Ok(())
    }
}

fn check_unique(kind: &str, values: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(CatalogError::InvalidConfig(format!(
                "duplicate default {kind} '{value}'"
            )));
        }
    }
    Ok(())
}
