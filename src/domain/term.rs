//! Taxonomy terms
//!
//! Two taxonomies classify posts: hierarchical categories and flat tags.
//! Category identity is keyed on the normalized slug, tag identity on the
//! exact name.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Maximum accepted length for a term name
pub const MAX_TERM_NAME_LEN: usize = 200;

/// Regex matching runs of characters that cannot appear in a slug
fn slug_separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Normalize a human-readable name into a URL slug.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single dash, and trims leading/trailing dashes. Returns an empty string
/// when the name has no usable characters.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let slug = slug_separator_regex().replace_all(&lowered, "-");
    slug.trim_matches('-').to_string()
}

/// Identifier of a taxonomy term
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(pub u64);

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The two taxonomy kinds posts are classified under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyKind {
    Category,
    Tag,
}

impl TaxonomyKind {
    /// Capitalized label used in user-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            TaxonomyKind::Category => "Category",
            TaxonomyKind::Tag => "Tag",
        }
    }

    /// Lowercase label used in messages and URLs
    pub fn slug(&self) -> &'static str {
        match self {
            TaxonomyKind::Category => "category",
            TaxonomyKind::Tag => "tag",
        }
    }
}

/// A single classification value within a taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: TermId,
    pub name: String,
    pub slug: String,
    pub kind: TaxonomyKind,

    /// Parent term, categories only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<TermId>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Term {
    /// Archive URL for this term, e.g. `https://example.com/category/news/`
    pub fn link(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}/",
            base_url.trim_end_matches('/'),
            self.kind.slug(),
            self.slug
        )
    }
}

/// Validate a term name prior to creation.
///
/// Returns the normalized slug on success, or a human-readable reason when
/// the name cannot become a term.
pub fn validate_term_name(name: &str) -> std::result::Result<String, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("name is empty".to_string());
    }
    if trimmed.len() > MAX_TERM_NAME_LEN {
        return Err(format!("name exceeds {} characters", MAX_TERM_NAME_LEN));
    }
    let slug = slugify(trimmed);
    if slug.is_empty() {
        return Err("name contains no usable characters".to_string());
    }
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("News"), "news");
        assert_eq!(slugify("Local News"), "local-news");
        assert_eq!(slugify("  Rust & Systems  "), "rust-systems");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("a --- b"), "a-b");
        assert_eq!(slugify("--edge--"), "edge");
    }

    #[test]
    fn test_slugify_no_usable_characters() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn test_validate_term_name_ok() {
        assert_eq!(validate_term_name("Local News").unwrap(), "local-news");
    }

    #[test]
    fn test_validate_term_name_rejects_unusable() {
        let reason = validate_term_name("!!!").unwrap_err();
        assert!(reason.contains("no usable characters"));
    }

    #[test]
    fn test_validate_term_name_rejects_too_long() {
        let long = "a".repeat(MAX_TERM_NAME_LEN + 1);
        let reason = validate_term_name(&long).unwrap_err();
        assert!(reason.contains("exceeds"));
    }

    #[test]
    fn test_term_link() {
        let term = Term {
            id: TermId(1),
            name: "News".to_string(),
            slug: "news".to_string(),
            kind: TaxonomyKind::Category,
            parent: None,
            description: String::new(),
        };
        assert_eq!(
            term.link("https://example.com/"),
            "https://example.com/category/news/"
        );
    }
}
