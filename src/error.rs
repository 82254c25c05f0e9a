//! Error types for sitemeta

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the sitemeta application
#[derive(Debug, Error)]
pub enum SiteMetaError {
    #[error("Not a sitemeta directory: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Post not found: {0}")]
    PostNotFound(u64),

    #[error("Term not found: {0}")]
    TermNotFound(String),

    #[error("Unknown sitemap section: {0}")]
    UnknownSitemapSection(String),

    #[error("Invalid term name: {0}")]
    InvalidTermName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Front matter error in {file}: {message}")]
    FrontMatter { file: String, message: String },

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteMetaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SiteMetaError::NotSiteDirectory(_) => 2,
            SiteMetaError::PostNotFound(_) | SiteMetaError::TermNotFound(_) => 4,
            SiteMetaError::UnknownSitemapSection(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SiteMetaError::NotSiteDirectory(path) => {
                format!(
                    "Not a sitemeta directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'sitemeta init' in this directory to set up a new site\n\
                    • Navigate to an existing sitemeta directory\n\
                    • Set SITEMETA_ROOT environment variable to your site path",
                    path.display()
                )
            }
            SiteMetaError::PostNotFound(id) => {
                format!(
                    "Post not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'sitemeta list' to see available posts\n\
                    • Check the id in the post's front matter",
                    id
                )
            }
            SiteMetaError::UnknownSitemapSection(section) => {
                format!(
                    "Unknown sitemap section: '{}'\n\n\
                    Valid sections: posts, pages, categories, tags\n\
                    Run 'sitemeta sitemap' without a section for the sitemap index",
                    section
                )
            }
            SiteMetaError::Config(msg) => {
                if msg.contains("Unknown configuration key") {
                    format!(
                        "{}\n\n\
                        Run 'sitemeta config --list' to see available keys",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SiteMetaError
pub type Result<T> = std::result::Result<T, SiteMetaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_site_directory_suggestion() {
        let err = SiteMetaError::NotSiteDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("sitemeta init"));
        assert!(msg.contains("SITEMETA_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_post_not_found_suggestion() {
        let err = SiteMetaError::PostNotFound(42);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("sitemeta list"));
        assert!(msg.contains("42"));
    }

    #[test]
    fn test_unknown_sitemap_section_lists_valid_sections() {
        let err = SiteMetaError::UnknownSitemapSection("authors".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("posts, pages, categories, tags"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            SiteMetaError::NotSiteDirectory(PathBuf::from("/x")).exit_code(),
            2
        );
        assert_eq!(SiteMetaError::PostNotFound(1).exit_code(), 4);
        assert_eq!(
            SiteMetaError::UnknownSitemapSection("x".to_string()).exit_code(),
            5
        );
        assert_eq!(SiteMetaError::Config("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = SiteMetaError::Config("Invalid base_url".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Invalid base_url");
    }
}
