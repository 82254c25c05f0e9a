//! Site initialization use case

use crate::error::{Result, SiteMetaError};
use crate::infrastructure::{ContentStore, FileSystemStore, SiteConfig};
use std::path::Path;

/// Service for initializing a new site
pub struct InitService;

impl InitService {
    /// Set up the .sitemeta structure and write an initial configuration
    pub fn execute(path: &Path, site_name: &str, base_url: &str) -> Result<()> {
        let store = FileSystemStore::new(path.to_path_buf());

        if store.is_initialized() {
            return Err(SiteMetaError::Config(format!(
                "Directory already initialized: {}",
                path.display()
            )));
        }

        store.initialize()?;
        store.save_config(&SiteConfig::new(site_name, base_url))?;

        println!("Initialized sitemeta site in {}", path.display());
        Ok(())
    }
}
