//! Output formatting utilities

use crate::application::TermApplication;
use crate::domain::{Post, Term};
use crate::infrastructure::Notice;

/// Format a list of posts for display
pub fn format_post_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for post in posts {
        output.push_str(&format!(
            "{:>4}  {:<4}  {:<9}  {}\n",
            post.id.0,
            post.kind.section(),
            post.status.label(),
            post.title
        ));
    }
    output
}

/// Format a list of terms for display.
pub fn format_term_list(terms: &[Term]) -> String {
    if terms.is_empty() {
        return "No terms found".to_string();
    }

    let mut output = String::new();
    for term in terms {
        output.push_str(&format!(
            "{:>4}  {:<8}  {:<20}  {}\n",
            term.id.0,
            term.kind.slug(),
            term.slug,
            term.name
        ));
    }

    output
}

/// Format the result of a term application for display
pub fn format_application(application: &TermApplication) -> String {
    let mut output = String::new();
    output.push_str(&application.message);
    output.push('\n');

    let categories = &application.report.categories.success;
    if !categories.is_empty() {
        output.push_str(&format!("Categories: {}\n", categories.join(", ")));
    }
    let tags = &application.report.tags.success;
    if !tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", tags.join(", ")));
    }

    let errors = application.report.all_errors();
    if !errors.is_empty() {
        output.push_str("Errors:\n");
        for error in errors {
            output.push_str(&format!("  - {}\n", error));
        }
    }

    output
}

/// Format a stored notice for display
pub fn format_notice(notice: Option<&Notice>) -> String {
    let Some(notice) = notice else {
        return "No pending notices".to_string();
    };

    let mut output = String::new();
    if notice.success_count > 0 {
        output.push_str(&format!(
            "Successfully processed {} terms\n",
            notice.success_count
        ));
    }
    if !notice.errors.is_empty() {
        output.push_str("Errors:\n");
        for error in &notice.errors {
            output.push_str(&format!("  - {}\n", error));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Post, PostId, PostKind, PostStatus, ReconcileReport, SeoMeta, TaxonomyKind, Term, TermId,
    };

    fn sample_post(id: u64, title: &str, kind: PostKind) -> Post {
        Post {
            id: PostId(id),
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            kind,
            status: PostStatus::Published,
            parent: None,
            author: "admin".to_string(),
            published: chrono::Utc::now(),
            modified: chrono::Utc::now(),
            comment_count: 0,
            excerpt: None,
            content: String::new(),
            categories: vec![],
            tags: vec![],
            seo: SeoMeta::default(),
        }
    }

    #[test]
    fn test_format_empty_post_list() {
        let output = format_post_list(&[]);
        assert_eq!(output, "No posts found");
    }

    #[test]
    fn test_format_post_list() {
        let posts = vec![
            sample_post(1, "Hello World", PostKind::Post),
            sample_post(2, "About", PostKind::Page),
        ];

        let output = format_post_list(&posts);
        assert!(output.contains("Hello World"));
        assert!(output.contains("post"));
        assert!(output.contains("page"));
        assert!(output.contains("published"));
    }

    #[test]
    fn test_format_empty_term_list() {
        let output = format_term_list(&[]);
        assert_eq!(output, "No terms found");
    }

    #[test]
    fn test_format_term_list() {
        let terms = vec![Term {
            id: TermId(1),
            name: "News".to_string(),
            slug: "news".to_string(),
            kind: TaxonomyKind::Category,
            parent: None,
            description: String::new(),
        }];

        let output = format_term_list(&terms);
        assert!(output.contains("category"));
        assert!(output.contains("news"));
        assert!(output.contains("News"));
    }

    #[test]
    fn test_format_application_with_errors() {
        let mut report = ReconcileReport::default();
        report.categories.success.push("News".to_string());
        report
            .categories
            .errors
            .push("Category \"Archived\" does not exist and auto-creation is disabled".to_string());

        let application = TermApplication {
            post_id: 1,
            report,
            message: "Processed 1 categories and 0 tags for post 1".to_string(),
        };

        let output = format_application(&application);
        assert!(output.contains("Processed 1 categories"));
        assert!(output.contains("Categories: News"));
        assert!(output.contains("Errors:"));
        assert!(output.contains("  - Category \"Archived\""));
    }

    #[test]
    fn test_format_missing_notice() {
        assert_eq!(format_notice(None), "No pending notices");
    }

    #[test]
    fn test_format_notice() {
        let notice = Notice {
            success_count: 3,
            errors: vec!["Failed to create category \"X\": broken".to_string()],
        };

        let output = format_notice(Some(&notice));
        assert!(output.contains("Successfully processed 3 terms"));
        assert!(output.contains("Failed to create category"));
    }

    #[test]
    fn test_format_notice_with_only_errors() {
        let notice = Notice {
            success_count: 0,
            errors: vec!["Category \"X\" does not exist and auto-creation is disabled".to_string()],
        };

        let output = format_notice(Some(&notice));
        assert!(!output.contains("Successfully"));
        assert!(output.contains("Errors:"));
        assert!(output.contains("does not exist"));
    }
}
