//! Breadcrumb trail rendering
//!
//! Trail construction lives in the application layer (it needs the store to
//! walk parent pointers); this module holds the crumb model and the HTML
//! renderer.

use crate::domain::markup::escape;

/// One item in a breadcrumb trail. The current page has no URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub text: String,
    pub url: Option<String>,
}

impl Crumb {
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Crumb {
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn current(text: impl Into<String>) -> Self {
        Crumb {
            text: text.into(),
            url: None,
        }
    }
}

/// Rendering options for a breadcrumb trail
#[derive(Debug, Clone)]
pub struct BreadcrumbOptions {
    pub separator: String,
    pub home_text: String,
    pub show_home: bool,
    pub show_current: bool,
    pub structured_data: bool,
}

impl Default for BreadcrumbOptions {
    fn default() -> Self {
        BreadcrumbOptions {
            separator: " > ".to_string(),
            home_text: "Home".to_string(),
            show_home: true,
            show_current: true,
            structured_data: false,
        }
    }
}

/// Render a trail as an ordered list inside a nav landmark
pub fn render_html(crumbs: &[Crumb], options: &BreadcrumbOptions) -> String {
    let mut out = String::new();
    out.push_str("<nav class=\"breadcrumbs\" aria-label=\"Breadcrumb\">");
    out.push_str("<ol class=\"breadcrumb-list\">");

    for (index, crumb) in crumbs.iter().enumerate() {
        out.push_str("<li class=\"breadcrumb-item\">");
        match &crumb.url {
            Some(url) => {
                out.push_str(&format!(
                    "<a href=\"{}\">{}</a>",
                    escape(url),
                    escape(&crumb.text)
                ));
            }
            None => {
                out.push_str(&format!("<span>{}</span>", escape(&crumb.text)));
            }
        }
        out.push_str("</li>");

        if index < crumbs.len() - 1 {
            out.push_str(&format!(
                "<li class=\"breadcrumb-separator\">{}</li>",
                escape(&options.separator)
            ));
        }
    }

    out.push_str("</ol>");
    out.push_str("</nav>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_links_and_current() {
        let crumbs = vec![
            Crumb::link("Home", "https://example.com/"),
            Crumb::link("News", "https://example.com/category/news/"),
            Crumb::current("Hello World"),
        ];
        let html = render_html(&crumbs, &BreadcrumbOptions::default());

        assert!(html.contains("<a href=\"https://example.com/\">Home</a>"));
        assert!(html.contains("<a href=\"https://example.com/category/news/\">News</a>"));
        assert!(html.contains("<span>Hello World</span>"));
    }

    #[test]
    fn test_separator_between_items_only() {
        let crumbs = vec![Crumb::link("Home", "/"), Crumb::current("Page")];
        let html = render_html(&crumbs, &BreadcrumbOptions::default());
        assert_eq!(html.matches("breadcrumb-separator").count(), 1);
    }

    #[test]
    fn test_text_is_escaped() {
        let crumbs = vec![Crumb::current("Fish & Chips")];
        let html = render_html(&crumbs, &BreadcrumbOptions::default());
        assert!(html.contains("Fish &amp; Chips"));
    }

    #[test]
    fn test_custom_separator_escaped() {
        let crumbs = vec![Crumb::link("A", "/"), Crumb::current("B")];
        let options = BreadcrumbOptions {
            separator: " » ".to_string(),
            ..BreadcrumbOptions::default()
        };
        let html = render_html(&crumbs, &options);
        assert!(html.contains(" » "));
    }
}
