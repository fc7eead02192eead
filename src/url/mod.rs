//! URL handling module for sitemapper
//!
//! This module provides the origin abstraction used to scope the crawl to
//! a single site.

mod origin;

pub use origin::Origin;
