//! Sitemap generation use case
//!
//! Emits a sitemap index plus per-section urlsets following the
//! sitemaps.org protocol, with image and hreflang extensions.

use crate::domain::content::{Post, PostId, PostKind};
use crate::domain::markup::escape;
use crate::domain::term::{TaxonomyKind, Term};
use crate::error::{Result, SiteMetaError};
use crate::infrastructure::{FileSystemStore, SiteConfig};
use chrono::{DateTime, Utc};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const URLSET_OPEN: &str = "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
    xmlns:image=\"http://www.google.com/schemas/sitemap-image/1.1\" \
    xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n";
const SITEMAPINDEX_OPEN: &str =
    "<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n";

/// Service for generating sitemap XML
pub struct SitemapService {
    store: FileSystemStore,
    config: SiteConfig,
}

impl SitemapService {
    pub fn new(store: FileSystemStore, config: SiteConfig) -> Self {
        SitemapService { store, config }
    }

    /// Generate the sitemap index
    pub fn index(&self) -> Result<String> {
        let posts = self.store.list_posts()?;
        let now = Utc::now();

        let mut out = String::new();
        out.push_str(XML_DECLARATION);
        out.push_str(SITEMAPINDEX_OPEN);

        for kind in [PostKind::Post, PostKind::Page] {
            let published: Vec<&Post> = posts
                .iter()
                .filter(|p| p.kind == kind && p.is_published())
                .collect();
            if published.is_empty() {
                continue;
            }
            let last_modified = published
                .iter()
                .map(|p| p.modified)
                .max()
                .unwrap_or(now);
            self.push_index_entry(&mut out, kind.section(), last_modified);
        }

        for (kind, section) in [(TaxonomyKind::Category, "categories"), (TaxonomyKind::Tag, "tags")]
        {
            if !self.terms_with_posts(kind, &posts)?.is_empty() {
                self.push_index_entry(&mut out, section, now);
            }
        }

        out.push_str("</sitemapindex>");
        Ok(out)
    }

    /// Generate the urlset for one section: posts, pages, categories or tags
    pub fn section(&self, name: &str) -> Result<String> {
        let mut out = String::new();
        out.push_str(XML_DECLARATION);
        out.push_str(URLSET_OPEN);

        match name {
            "posts" => self.push_post_urls(&mut out, PostKind::Post)?,
            "pages" => self.push_post_urls(&mut out, PostKind::Page)?,
            "categories" => self.push_term_urls(&mut out, TaxonomyKind::Category)?,
            "tags" => self.push_term_urls(&mut out, TaxonomyKind::Tag)?,
            other => return Err(SiteMetaError::UnknownSitemapSection(other.to_string())),
        }

        out.push_str("</urlset>");
        Ok(out)
    }

    fn push_index_entry(&self, out: &mut String, section: &str, lastmod: DateTime<Utc>) {
        out.push_str("<sitemap>\n");
        out.push_str(&format!(
            "<loc>{}/sitemap-{}.xml</loc>\n",
            escape(&self.config.base_url),
            section
        ));
        out.push_str(&format!("<lastmod>{}</lastmod>\n", format_lastmod(lastmod)));
        out.push_str("</sitemap>\n");
    }

    fn push_post_urls(&self, out: &mut String, kind: PostKind) -> Result<()> {
        let mut posts: Vec<Post> = self
            .store
            .list_posts()?
            .into_iter()
            .filter(|p| p.kind == kind && p.is_published())
            .collect();
        posts.sort_by(|a, b| b.modified.cmp(&a.modified));

        let now = Utc::now();
        for post in &posts {
            // Posts excluded from indexing stay out of the sitemap
            if post.seo.noindex {
                continue;
            }

            let permalink = post.permalink(&self.config.base_url);

            out.push_str("<url>\n");
            out.push_str(&format!("<loc>{}</loc>\n", escape(&permalink)));
            out.push_str(&format!(
                "<lastmod>{}</lastmod>\n",
                format_lastmod(post.modified)
            ));
            out.push_str("<changefreq>weekly</changefreq>\n");
            out.push_str(&format!(
                "<priority>{}</priority>\n",
                priority(post, self.config.front_page, now)
            ));

            let language = post
                .seo
                .language
                .as_deref()
                .or(self.config.default_language.as_deref());
            if let Some(language) = language {
                out.push_str(&format!(
                    "<xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />\n",
                    escape(language),
                    escape(&permalink)
                ));
            }

            if let Some(image) = &post.seo.og_image {
                out.push_str("<image:image>\n");
                out.push_str(&format!("<image:loc>{}</image:loc>\n", escape(image)));
                out.push_str(&format!(
                    "<image:title>{}</image:title>\n",
                    escape(&post.title)
                ));
                out.push_str("</image:image>\n");
            }

            out.push_str("</url>\n");
        }
        Ok(())
    }

    fn push_term_urls(&self, out: &mut String, kind: TaxonomyKind) -> Result<()> {
        let posts = self.store.list_posts()?;
        let terms = self.terms_with_posts(kind, &posts)?;
        let now = Utc::now();

        for (term, _count) in terms {
            out.push_str("<url>\n");
            out.push_str(&format!(
                "<loc>{}</loc>\n",
                escape(&term.link(&self.config.base_url))
            ));
            out.push_str(&format!("<lastmod>{}</lastmod>\n", format_lastmod(now)));
            out.push_str("<changefreq>weekly</changefreq>\n");
            out.push_str("<priority>0.6</priority>\n");
            out.push_str("</url>\n");
        }
        Ok(())
    }

    /// Terms of a taxonomy with at least one published post, most assigned
    /// first
    fn terms_with_posts(
        &self,
        kind: TaxonomyKind,
        posts: &[Post],
    ) -> Result<Vec<(Term, usize)>> {
        let mut terms: Vec<(Term, usize)> = Vec::new();
        for term in self.store.all_terms()? {
            if term.kind != kind {
                continue;
            }
            let count = posts
                .iter()
                .filter(|p| p.is_published())
                .filter(|p| match kind {
                    TaxonomyKind::Category => p.categories.contains(&term.id),
                    TaxonomyKind::Tag => p.tags.contains(&term.id),
                })
                .count();
            if count > 0 {
                terms.push((term, count));
            }
        }
        terms.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(terms)
    }
}

/// Sitemap priority for a post: the front page scores 1.0, pages 0.8, and
/// posts 0.5 with bonuses for discussion and recency, capped at 1.0.
fn priority(post: &Post, front_page: Option<PostId>, now: DateTime<Utc>) -> String {
    if front_page == Some(post.id) {
        return "1.0".to_string();
    }
    if post.kind == PostKind::Page {
        return "0.8".to_string();
    }

    let mut value: f64 = 0.5;

    if post.comment_count > 10 {
        value += 0.1;
    }

    let age_days = (now - post.published).num_days();
    if age_days < 30 {
        value += 0.2;
    } else if age_days < 90 {
        value += 0.1;
    }

    format!("{:.1}", value.min(1.0))
}

fn format_lastmod(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S+00:00").to_string()
}
