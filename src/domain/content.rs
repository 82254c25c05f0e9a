//! Content items
//!
//! Posts and pages are the units everything else hangs off: term assignments,
//! SEO metadata, sitemap entries and breadcrumb trails.

use crate::domain::term::TermId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a post or page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Post,
    Page,
}

impl PostKind {
    /// Plural label used as the sitemap section name
    pub fn section(&self) -> &'static str {
        match self {
            PostKind::Post => "posts",
            PostKind::Page => "pages",
        }
    }
}

/// Publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
    Draft,
}

impl PostStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PostStatus::Published => "published",
            PostStatus::Draft => "draft",
        }
    }
}

/// Per-post SEO metadata, all optional overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,

    /// Free-form robots directive appended after the boolean flags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,

    // Open Graph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_locale: Option<String>,

    // Twitter Card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_creator: Option<String>,

    // Schema.org
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Raw JSON-LD emitted verbatim, overrides any generated schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_data: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,

    // Redirect
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_type: Option<u16>,

    /// Per-post hreflang language, falls back to the site default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    // Robots flags
    pub noindex: bool,
    pub nofollow: bool,
    pub noarchive: bool,
    pub nosnippet: bool,
    pub noimageindex: bool,
}

/// A post or page with its metadata and term assignments
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub slug: String,
    pub kind: PostKind,
    pub status: PostStatus,

    /// Parent page, used for breadcrumb trails
    pub parent: Option<PostId>,

    pub author: String,
    pub published: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub comment_count: u32,

    pub excerpt: Option<String>,
    pub content: String,
    pub seo: SeoMeta,

    pub categories: Vec<TermId>,
    pub tags: Vec<TermId>,
}

impl Post {
    /// Canonical URL of this post, e.g. `https://example.com/hello-world/`
    pub fn permalink(&self, base_url: &str) -> String {
        format!("{}/{}/", base_url.trim_end_matches('/'), self.slug)
    }

    /// Author archive URL
    pub fn author_url(&self, base_url: &str) -> String {
        format!(
            "{}/author/{}/",
            base_url.trim_end_matches('/'),
            crate::domain::term::slugify(&self.author)
        )
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Description used when no explicit SEO description is set: the excerpt
    /// if present, otherwise the post body stripped of markup, trimmed to 25
    /// words.
    pub fn fallback_description(&self) -> String {
        let text = match &self.excerpt {
            Some(excerpt) if !excerpt.is_empty() => excerpt.clone(),
            _ => crate::domain::markup::plain_text(&self.content),
        };
        crate::domain::markup::trim_words(&text, 25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_post() -> Post {
        Post {
            id: PostId(1),
            title: "Hello World".to_string(),
            slug: "hello-world".to_string(),
            kind: PostKind::Post,
            status: PostStatus::Published,
            parent: None,
            author: "Jane Doe".to_string(),
            published: Utc.with_ymd_and_hms(2025, 1, 17, 10, 0, 0).unwrap(),
            modified: Utc.with_ymd_and_hms(2025, 1, 18, 10, 0, 0).unwrap(),
            comment_count: 0,
            excerpt: None,
            content: String::new(),
            seo: SeoMeta::default(),
            categories: vec![],
            tags: vec![],
        }
    }

    #[test]
    fn test_permalink_trims_trailing_slash() {
        let post = sample_post();
        assert_eq!(
            post.permalink("https://example.com/"),
            "https://example.com/hello-world/"
        );
        assert_eq!(
            post.permalink("https://example.com"),
            "https://example.com/hello-world/"
        );
    }

    #[test]
    fn test_author_url_slugifies_name() {
        let post = sample_post();
        assert_eq!(
            post.author_url("https://example.com"),
            "https://example.com/author/jane-doe/"
        );
    }

    #[test]
    fn test_fallback_description_prefers_excerpt() {
        let mut post = sample_post();
        post.excerpt = Some("Short excerpt.".to_string());
        post.content = "Long body that should not be used.".to_string();
        assert_eq!(post.fallback_description(), "Short excerpt.");
    }

    #[test]
    fn test_fallback_description_trims_content() {
        let mut post = sample_post();
        post.content = (0..30).map(|i| format!("word{}", i)).collect::<Vec<_>>().join(" ");
        let description = post.fallback_description();
        assert!(description.ends_with('…'));
        assert_eq!(description.split_whitespace().count(), 25);
    }

    #[test]
    fn test_seo_meta_round_trips_through_toml() {
        let meta = SeoMeta {
            title: Some("Custom".to_string()),
            noindex: true,
            ..SeoMeta::default()
        };
        let text = toml::to_string(&meta).unwrap();
        let back: SeoMeta = toml::from_str(&text).unwrap();
        assert_eq!(back, meta);
    }
}
