//! # Browse Session
//!
//! This module ties the listing together for one buyer:
//! 1. Hold the latest creator feed (Loading or Loaded)
//! 2. Hold the buyer's FilterState and apply their actions
//! 3. Keep facet options current for the feed
//! 4. Produce a BrowseView for the presentation layer
//!
//! ## Recomputation
//! Facet options depend only on the feed, so they are resolved once per feed
//! change and reused across filter actions. The filtered list depends on both
//! and is re-evaluated in full on every `view()`.

use std::sync::Arc;

use tracing::{debug, instrument};

use catalog::{Creator, CreatorFeed, MarketplaceConfig, PriceBucket};
use pipeline::{FacetOptions, FilterPipeline, FilterState};

use crate::error::{Result, SessionError};

/// Filtered listing, or the fact that there is no listing yet.
#[derive(Debug, Clone, PartialEq)]
pub enum Results<'a> {
    /// The feed has not produced creators yet
    Loading,
    /// Creators passing every filter, in feed order
    Loaded(Vec<&'a Creator>),
}

/// Everything the presentation layer renders for the current state.
#[derive(Debug, Clone)]
pub struct BrowseView<'a> {
    pub results: Results<'a>,
    pub has_active_filters: bool,
    pub content_type_options: &'a [String],
    pub attribute_options: &'a [String],
    pub price_buckets: &'a [PriceBucket],
}

impl<'a> BrowseView<'a> {
    pub fn is_loading(&self) -> bool {
        matches!(self.results, Results::Loading)
    }

    /// Number of matches, or `None` while the feed is loading.
    pub fn match_count(&self) -> Option<usize> {
        match &self.results {
            Results::Loading => None,
            Results::Loaded(creators) => Some(creators.len()),
        }
    }

    /// The matching creators; empty while loading.
    pub fn creators(&self) -> &[&'a Creator] {
        match &self.results {
            Results::Loading => &[],
            Results::Loaded(creators) => creators,
        }
    }

    /// True when the feed has loaded and nothing matches.
    pub fn is_empty_result(&self) -> bool {
        self.match_count() == Some(0)
    }
}

/// One buyer's view of the creator listing.
pub struct BrowseSession {
    config: Arc<MarketplaceConfig>,
    pipeline: FilterPipeline,
    feed: CreatorFeed,
    /// Bumped whenever the feed content changes
    feed_revision: u64,
    options: FacetOptions,
    state: FilterState,
}

impl BrowseSession {
    /// Start a session with default selections and a loading feed.
    pub fn new(config: Arc<MarketplaceConfig>) -> Self {
        let options = FacetOptions::resolve(&config, &[]);
        Self {
            pipeline: FilterPipeline::standard(config.clone()),
            config,
            feed: CreatorFeed::Loading,
            feed_revision: 0,
            options,
            state: FilterState::default(),
        }
    }

    pub fn config(&self) -> &MarketplaceConfig {
        &self.config
    }

    pub fn feed(&self) -> &CreatorFeed {
        &self.feed
    }

    pub fn feed_revision(&self) -> u64 {
        self.feed_revision
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn options(&self) -> &FacetOptions {
        &self.options
    }

    /// Replace the feed with the data source's latest value.
    ///
    /// Facet options are re-resolved only if the content actually changed.
    #[instrument(skip_all, fields(revision = self.feed_revision))]
    pub fn set_feed(&mut self, feed: CreatorFeed) {
        if feed == self.feed {
            debug!("Feed unchanged, keeping facet options");
            return;
        }
        self.feed = feed;
        self.feed_revision += 1;
        self.options = FacetOptions::resolve(&self.config, self.feed.creators_or_empty());
        debug!(
            "Feed updated to revision {} ({})",
            self.feed_revision,
            match self.feed.creators() {
                Some(creators) => format!("{} creators", creators.len()),
                None => "loading".to_string(),
            }
        );
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.set_search_query(query);
    }

    /// Select a price bucket by key.
    ///
    /// # Errors
    /// `SessionError::UnknownPriceBucket` if the key is not in the table;
    /// the state is left unchanged.
    pub fn set_price_bucket(&mut self, key: &str) -> Result<()> {
        if self.config.price_bucket(key).is_none() {
            return Err(SessionError::UnknownPriceBucket(key.to_string()));
        }
        self.state.set_price_bucket_key(key);
        Ok(())
    }

    /// Select a content type, or `"all"`.
    pub fn set_content_type(&mut self, key: impl Into<String>) {
        self.state.set_content_type_key(key);
    }

    /// Flip an attribute; returns whether it is now active.
    pub fn toggle_attribute(&mut self, attribute: &str) -> bool {
        self.state.toggle_attribute(attribute)
    }

    pub fn clear_filters(&mut self) {
        self.state.clear();
    }

    /// Evaluate the current state against the current feed.
    #[instrument(skip_all, fields(revision = self.feed_revision))]
    pub fn view(&self) -> BrowseView<'_> {
        let results = match self.feed.creators() {
            None => Results::Loading,
            Some(creators) => {
                let filtered = self.pipeline.apply(creators, &self.state);
                debug!("{} of {} creators match", filtered.len(), creators.len());
                Results::Loaded(filtered)
            }
        };

        BrowseView {
            results,
            has_active_filters: self.state.has_active_filters(),
            content_type_options: &self.options.content_types,
            attribute_options: &self.options.attributes,
            price_buckets: &self.config.price_buckets,
        }
    }
}
