//! Directory site builder for the jua generator.
//!
//! Turns an ordered company list into a static directory site: one index
//! page, one detail page per company, a JSON data file the client script
//! renders from, and shared CSS/JS assets.

pub mod assets;
pub mod builder;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
