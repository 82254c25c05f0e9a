//! JSON-LD schema assembly
//!
//! Builds schema.org structures as `serde_json` values; rendering wraps them
//! in a `<script type="application/ld+json">` element.

use crate::domain::breadcrumbs::Crumb;
use crate::domain::content::Post;
use serde_json::{json, Map, Value};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Article schema for a post
pub fn article(
    post: &Post,
    description: &str,
    image: Option<&str>,
    site_name: &str,
    base_url: &str,
) -> Value {
    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": post.title,
        "description": description,
        "author": {
            "@type": "Person",
            "name": post.author,
            "url": post.author_url(base_url),
        },
        "publisher": {
            "@type": "Organization",
            "name": site_name,
            "url": base_url,
        },
        "datePublished": post.published.to_rfc3339(),
        "dateModified": post.modified.to_rfc3339(),
        "mainEntityOfPage": post.permalink(base_url),
        "url": post.permalink(base_url),
    });
    insert_image(&mut schema, image);
    schema
}

/// Product schema, basic structure
pub fn product(post: &Post, description: &str, image: Option<&str>, base_url: &str) -> Value {
    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Product",
        "name": post.title,
        "description": description,
        "url": post.permalink(base_url),
    });
    insert_image(&mut schema, image);
    schema
}

/// Event schema, basic structure
pub fn event(post: &Post, description: &str, base_url: &str) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Event",
        "name": post.title,
        "description": description,
        "url": post.permalink(base_url),
    })
}

/// FAQPage schema skeleton
pub fn faq_page() -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": [],
    })
}

/// Organization schema from site configuration
pub fn organization(name: &str, base_url: &str, logo: Option<&str>) -> Value {
    let mut schema = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": name,
        "url": base_url,
    });
    if let Some(logo_url) = logo {
        if let Value::Object(map) = &mut schema {
            map.insert("logo".to_string(), Value::String(logo_url.to_string()));
        }
    }
    schema
}

/// BreadcrumbList schema from a rendered trail. Items without a URL carry a
/// null `item`, matching the trailing current-page crumb.
pub fn breadcrumb_list(crumbs: &[Crumb]) -> Value {
    let items: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(index, crumb)| {
            let mut item = Map::new();
            item.insert("@type".to_string(), Value::String("ListItem".to_string()));
            item.insert("position".to_string(), Value::from(index + 1));
            item.insert("name".to_string(), Value::String(crumb.text.clone()));
            item.insert(
                "item".to_string(),
                match &crumb.url {
                    Some(url) => Value::String(url.clone()),
                    None => Value::Null,
                },
            );
            Value::Object(item)
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// Wrap a schema value in its script element
pub fn render_json_ld(schema: &Value) -> String {
    format!(
        "<script type=\"application/ld+json\">\n{}\n</script>\n",
        serde_json::to_string_pretty(schema).unwrap_or_default()
    )
}

/// Wrap raw, user-supplied JSON-LD in its script element verbatim
pub fn render_raw_json_ld(raw: &str) -> String {
    format!("<script type=\"application/ld+json\">\n{}\n</script>\n", raw)
}

fn insert_image(schema: &mut Value, image: Option<&str>) {
    if let (Value::Object(map), Some(url)) = (schema, image) {
        map.insert("image".to_string(), Value::String(url.to_string()));
    }
}
