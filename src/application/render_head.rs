//! Head block rendering use case
//!
//! Assembles the full `<head>` markup for a post: basic meta, robots,
//! canonical, Open Graph, Twitter Card, JSON-LD schema, site verification
//! and analytics. A post carrying a redirect short-circuits to a redirect
//! outcome instead of markup.

use crate::domain::content::{Post, PostId};
use crate::domain::markup::escape;
use crate::domain::robots::robots_directives;
use crate::domain::schema;
use crate::domain::term::TermId;
use crate::error::Result;
use crate::infrastructure::{FileSystemStore, SiteConfig};

const DEFAULT_REDIRECT_STATUS: u16 = 301;

/// Result of rendering a post's head
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadOutput {
    /// The post redirects elsewhere; nothing is rendered
    Redirect { url: String, status: u16 },
    Markup(String),
}

/// Service for rendering a post's head block
pub struct HeadService {
    store: FileSystemStore,
    config: SiteConfig,
}

impl HeadService {
    pub fn new(store: FileSystemStore, config: SiteConfig) -> Self {
        HeadService { store, config }
    }

    pub fn execute(&self, post_id: u64) -> Result<HeadOutput> {
        let post = self.store.load_post(PostId(post_id))?;

        // Redirect wins over everything else
        if let Some(url) = &post.seo.redirect_url {
            return Ok(HeadOutput::Redirect {
                url: url.clone(),
                status: post.seo.redirect_type.unwrap_or(DEFAULT_REDIRECT_STATUS),
            });
        }

        let base_url = &self.config.base_url;
        let title = post.seo.title.clone().unwrap_or_else(|| post.title.clone());
        let description = post
            .seo
            .description
            .clone()
            .unwrap_or_else(|| post.fallback_description());
        let canonical = post
            .seo
            .canonical_url
            .clone()
            .unwrap_or_else(|| post.permalink(base_url));

        let mut out = String::new();
        out.push_str("\n<!-- sitemeta -->\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");

        out.push_str(&format!("<title>{}</title>\n", escape(&title)));
        out.push_str(&meta_name("description", &description));
        if let Some(keywords) = &post.seo.meta_keywords {
            out.push_str(&meta_name("keywords", keywords));
        }
        out.push_str(&meta_name(
            "robots",
            &robots_directives(&post.seo).join(","),
        ));
        out.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            escape(&canonical)
        ));

        self.render_open_graph(&mut out, &post, &title, &description)?;
        self.render_twitter(&mut out, &post, &title, &description);
        self.render_post_schema(&mut out, &post, &description);
        self.render_global(&mut out);

        out.push_str("<!-- /sitemeta -->\n");
        Ok(HeadOutput::Markup(out))
    }

    fn render_open_graph(
        &self,
        out: &mut String,
        post: &Post,
        title: &str,
        description: &str,
    ) -> Result<()> {
        let base_url = &self.config.base_url;
        let og_title = post.seo.og_title.as_deref().unwrap_or(title);
        let og_description = post.seo.og_description.as_deref().unwrap_or(description);
        let og_type = post.seo.og_type.as_deref().unwrap_or("article");
        let og_locale = post.seo.og_locale.as_deref().unwrap_or(&self.config.locale);

        out.push_str(&meta_property("og:title", og_title));
        out.push_str(&meta_property("og:description", og_description));
        out.push_str(&meta_property("og:type", og_type));
        out.push_str(&meta_property("og:url", &post.permalink(base_url)));
        out.push_str(&meta_property("og:locale", og_locale));
        out.push_str(&meta_property("og:site_name", &self.config.site_name));

        let image = post
            .seo
            .og_image
            .as_deref()
            .or(self.config.default_og_image.as_deref());
        if let Some(image_url) = image {
            out.push_str(&meta_property("og:image", image_url));
            // Dimensions and alt text are only known for the post's own image
            if post.seo.og_image.is_some() {
                if let Some(width) = post.seo.og_image_width {
                    out.push_str(&meta_property("og:image:width", &width.to_string()));
                }
                if let Some(height) = post.seo.og_image_height {
                    out.push_str(&meta_property("og:image:height", &height.to_string()));
                }
                if let Some(alt) = &post.seo.og_image_alt {
                    out.push_str(&meta_property("og:image:alt", alt));
                }
            }
        }

        if og_type == "article" {
            out.push_str(&meta_property(
                "article:published_time",
                &post.published.to_rfc3339(),
            ));
            out.push_str(&meta_property(
                "article:modified_time",
                &post.modified.to_rfc3339(),
            ));
            out.push_str(&meta_property("article:author", &post.author));

            for name in self.term_names(&post.categories)? {
                out.push_str(&meta_property("article:section", &name));
            }
            for name in self.term_names(&post.tags)? {
                out.push_str(&meta_property("article:tag", &name));
            }
        }

        Ok(())
    }

    fn render_twitter(&self, out: &mut String, post: &Post, title: &str, description: &str) {
        let card = post
            .seo
            .twitter_card
            .as_deref()
            .unwrap_or("summary_large_image");
        let tw_title = post.seo.twitter_title.as_deref().unwrap_or(title);
        let tw_description = post.seo.twitter_description.as_deref().unwrap_or(description);
        let tw_image = post
            .seo
            .twitter_image
            .as_deref()
            .or(self.config.default_og_image.as_deref());
        let tw_site = post
            .seo
            .twitter_site
            .as_deref()
            .or(self.config.twitter_site.as_deref());

        out.push_str(&meta_name("twitter:card", card));
        out.push_str(&meta_name("twitter:title", tw_title));
        out.push_str(&meta_name("twitter:description", tw_description));
        if let Some(image) = tw_image {
            out.push_str(&meta_name("twitter:image", image));
        }
        if let Some(site) = tw_site {
            out.push_str(&meta_name("twitter:site", site));
        }
        if let Some(creator) = &post.seo.twitter_creator {
            out.push_str(&meta_name("twitter:creator", creator));
        }
    }

    fn render_post_schema(&self, out: &mut String, post: &Post, description: &str) {
        // Raw user-supplied JSON-LD overrides any generated schema
        if let Some(raw) = &post.seo.schema_data {
            out.push_str(&schema::render_raw_json_ld(raw));
            return;
        }

        let base_url = &self.config.base_url;
        let image = post.seo.og_image.as_deref();
        let value = match post.seo.schema_type.as_deref() {
            None | Some("Article") => Some(schema::article(
                post,
                description,
                image,
                &self.config.site_name,
                base_url,
            )),
            Some("Product") => Some(schema::product(post, description, image, base_url)),
            Some("Event") => Some(schema::event(post, description, base_url)),
            Some("FAQ") => Some(schema::faq_page()),
            Some(_) => None,
        };

        if let Some(value) = value {
            out.push_str(&schema::render_json_ld(&value));
        }
    }

    fn render_global(&self, out: &mut String) {
        let verifications = [
            ("google-site-verification", &self.config.google_verification),
            ("msvalidate.01", &self.config.bing_verification),
            ("p:domain_verify", &self.config.pinterest_verification),
        ];
        for (name, value) in verifications {
            if let Some(content) = value {
                out.push_str(&meta_name(name, content));
            }
        }

        if let Some(app_id) = &self.config.facebook_app_id {
            out.push_str(&meta_property("fb:app_id", app_id));
        }

        if let Some(gtag_id) = &self.config.gtag_id {
            out.push_str(&gtag_snippet(gtag_id));
        } else if let Some(snippet) = &self.config.analytics_snippet {
            out.push_str(snippet);
            out.push('\n');
        }

        if let Some(org_name) = &self.config.organization_name {
            let org = schema::organization(
                org_name,
                &self.config.base_url,
                self.config.organization_logo.as_deref(),
            );
            out.push_str(&schema::render_json_ld(&org));
        }
    }

    fn term_names(&self, ids: &[TermId]) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for id in ids {
            if let Some(term) = self.store.term(*id)? {
                names.push(term.name);
            }
        }
        Ok(names)
    }
}

fn meta_name(name: &str, content: &str) -> String {
    format!(
        "<meta name=\"{}\" content=\"{}\">\n",
        escape(name),
        escape(content)
    )
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        "<meta property=\"{}\" content=\"{}\">\n",
        escape(property),
        escape(content)
    )
}

fn gtag_snippet(gtag_id: &str) -> String {
    format!(
        "<script async src=\"https://www.googletagmanager.com/gtag/js?id={id}\"></script>\n\
         <script>\n\
         window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', '{id}');\n\
         </script>\n",
        id = escape(gtag_id)
    )
}
