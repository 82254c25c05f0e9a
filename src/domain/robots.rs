//! Robots directive assembly

use crate::domain::content::SeoMeta;

/// Collect the robots directives for a post.
///
/// Flags are emitted in a fixed order, followed by the free-form robots
/// string. Defaults to `index,follow` when nothing is set.
pub fn robots_directives(seo: &SeoMeta) -> Vec<String> {
    let mut directives = Vec::new();

    if seo.noindex {
        directives.push("noindex".to_string());
    }
    if seo.nofollow {
        directives.push("nofollow".to_string());
    }
    if seo.noarchive {
        directives.push("noarchive".to_string());
    }
    if seo.nosnippet {
        directives.push("nosnippet".to_string());
    }
    if seo.noimageindex {
        directives.push("noimageindex".to_string());
    }

    if let Some(custom) = &seo.robots {
        if !custom.is_empty() {
            directives.push(custom.clone());
        }
    }

    if directives.is_empty() {
        directives.push("index,follow".to_string());
    }

    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_index_follow() {
        let seo = SeoMeta::default();
        assert_eq!(robots_directives(&seo), vec!["index,follow"]);
    }

    #[test]
    fn test_flags_in_fixed_order() {
        let seo = SeoMeta {
            noimageindex: true,
            noindex: true,
            nofollow: true,
            ..SeoMeta::default()
        };
        assert_eq!(
            robots_directives(&seo),
            vec!["noindex", "nofollow", "noimageindex"]
        );
    }

    #[test]
    fn test_custom_string_appended() {
        let seo = SeoMeta {
            noindex: true,
            robots: Some("max-snippet:50".to_string()),
            ..SeoMeta::default()
        };
        assert_eq!(robots_directives(&seo), vec!["noindex", "max-snippet:50"]);
    }

    #[test]
    fn test_empty_custom_string_ignored() {
        let seo = SeoMeta {
            robots: Some(String::new()),
            ..SeoMeta::default()
        };
        assert_eq!(robots_directives(&seo), vec!["index,follow"]);
    }
}
