//! Integration tests for the breadcrumbs command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{sitemeta_cmd, write_post};

fn init_site(temp: &TempDir) {
    sitemeta_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--url")
        .arg("https://example.com")
        .assert()
        .success();
}

#[test]
fn test_page_trail_walks_parents() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_post(
        temp.path(),
        "docs.md",
        "id = 1\ntitle = \"Docs\"\nkind = \"page\"\npublished = \"2025-01-17T10:00:00Z\"",
        "Docs root.",
    );
    write_post(
        temp.path(),
        "install.md",
        "id = 2\ntitle = \"Install\"\nkind = \"page\"\nparent = 1\npublished = \"2025-01-17T10:00:00Z\"",
        "Install guide.",
    );

    sitemeta_cmd()
        .current_dir(temp.path())
        .args(["breadcrumbs", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<a href=\"https://example.com/\">Home</a>",
        ))
        .stdout(predicate::str::contains(
            "<a href=\"https://example.com/docs/\">Docs</a>",
        ))
        .stdout(predicate::str::contains("<span>Install</span>"));
}

#[test]
fn test_post_trail_uses_primary_category() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_post(
        temp.path(),
        "hello-world.md",
        "id = 1\ntitle = \"Hello World\"\npublished = \"2025-01-17T10:00:00Z\"",
        "Body.",
    );

    sitemeta_cmd()
        .current_dir(temp.path())
        .args(["terms", "apply", "1", "--categories", "News"])
        .assert()
        .success();

    sitemeta_cmd()
        .current_dir(temp.path())
        .args(["breadcrumbs", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<a href=\"https://example.com/category/news/\">News</a>",
        ))
        .stdout(predicate::str::contains("<span>Hello World</span>"));
}

#[test]
fn test_term_trail_by_slug() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_post(
        temp.path(),
        "hello-world.md",
        "id = 1\ntitle = \"Hello World\"\npublished = \"2025-01-17T10:00:00Z\"",
        "Body.",
    );

    sitemeta_cmd()
        .current_dir(temp.path())
        .args(["terms", "apply", "1", "--categories", "Local News"])
        .assert()
        .success();

    sitemeta_cmd()
        .current_dir(temp.path())
        .args(["breadcrumbs", "--category", "local-news"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<span>Local News</span>"));
}

#[test]
fn test_breadcrumb_flags() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_post(
        temp.path(),
        "hello-world.md",
        "id = 1\ntitle = \"Hello World\"\npublished = \"2025-01-17T10:00:00Z\"",
        "Body.",
    );

    sitemeta_cmd()
        .current_dir(temp.path())
        .args(["breadcrumbs", "1", "--no-home", "--separator", " / "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Home").not());
}

#[test]
fn test_breadcrumb_json_ld() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_post(
        temp.path(),
        "hello-world.md",
        "id = 1\ntitle = \"Hello World\"\npublished = \"2025-01-17T10:00:00Z\"",
        "Body.",
    );

    sitemeta_cmd()
        .current_dir(temp.path())
        .args(["breadcrumbs", "1", "--json-ld"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"@type\": \"BreadcrumbList\""))
        .stdout(predicate::str::contains("application/ld+json"));
}

#[test]
fn test_unknown_term_fails() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    sitemeta_cmd()
        .current_dir(temp.path())
        .args(["breadcrumbs", "--tag", "missing"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("missing"));
}
