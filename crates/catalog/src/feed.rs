//! The inbound creator feed.
//!
//! A feed is either still loading or has produced a concrete, ordered list.
//! An empty `Loaded` list is a real answer ("no creators"), distinct from
//! `Loading` ("no answer yet").

use crate::types::Creator;

/// Latest value observed from the creator data source.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CreatorFeed {
    /// The source has not produced a list yet
    #[default]
    Loading,
    /// The source produced this list, in source order
    Loaded(Vec<Creator>),
}

impl CreatorFeed {
    pub fn is_loading(&self) -> bool {
        matches!(self, CreatorFeed::Loading)
    }

    /// The loaded creators, or `None` while loading.
    pub fn creators(&self) -> Option<&[Creator]> {
        match self {
            CreatorFeed::Loading => None,
            CreatorFeed::Loaded(creators) => Some(creators),
        }
    }

    /// The loaded creators, treating `Loading` as an empty list.
    ///
    /// Use this only where "nothing yet" and "nothing at all" are
    /// interchangeable, such as deriving facet options.
    pub fn creators_or_empty(&self) -> &[Creator] {
        self.creators().unwrap_or(&[])
    }
}

impl From<Vec<Creator>> for CreatorFeed {
    fn from(creators: Vec<Creator>) -> Self {
        CreatorFeed::Loaded(creators)
    }
}
