//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod store;

pub use config::SiteConfig;
pub use store::{ContentStore, FileSystemStore, Notice};
