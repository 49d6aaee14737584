//! Session crate for the creator finder.
//!
//! This crate contains the browse session that owns a buyer's filter state,
//! tracks the creator feed, and produces the view the presentation layer
//! renders.

pub mod browse;
pub mod error;

pub use browse::{BrowseSession, BrowseView, Results};
pub use error::{Result, SessionError};
