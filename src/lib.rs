//! sitemeta - SEO metadata manager for file-based content sites
//!
//! A command-line tool that manages posts and pages as markdown files with
//! TOML front matter, reconciles category/tag assignments, and renders
//! SEO head markup, XML sitemaps and breadcrumb trails.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SiteMetaError;
