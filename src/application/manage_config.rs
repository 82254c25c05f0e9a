//! Configuration management use case

use crate::error::Result;
use crate::infrastructure::{ContentStore, FileSystemStore, SiteConfig};

/// Service for viewing and modifying site configuration
pub struct ConfigService {
    store: FileSystemStore,
}

impl ConfigService {
    pub fn new(store: FileSystemStore) -> Self {
        ConfigService { store }
    }

    /// Load the full configuration
    pub fn list(&self) -> Result<SiteConfig> {
        self.store.load_config()
    }

    /// Get a single configuration value
    pub fn get(&self, key: &str) -> Result<String> {
        self.store.load_config()?.get(key)
    }

    /// Set a configuration value and persist it
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;
        config.set(key, value)?;
        self.store.save_config(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();
        store
            .save_config(&SiteConfig::new("Example", "https://example.com"))
            .unwrap();
        (temp, ConfigService::new(store))
    }

    #[test]
    fn test_get_set_round_trip() {
        let (_temp, service) = init_service();

        service.set("gtag_id", "G-42").unwrap();
        assert_eq!(service.get("gtag_id").unwrap(), "G-42");

        // Persisted, not just in memory
        let config = service.list().unwrap();
        assert_eq!(config.gtag_id.as_deref(), Some("G-42"));
    }

    #[test]
    fn test_unknown_key_errors() {
        let (_temp, service) = init_service();
        assert!(service.get("bogus").is_err());
        assert!(service.set("bogus", "x").is_err());
    }
}
