//! Integration tests for the sitemap command

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
fn test_sitemap_index() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_post(
        temp.path(),
        "hello-world.md",
        "id = 1\ntitle = \"Hello World\"\npublished = \"2025-01-17T10:00:00Z\"",
        "Body.",
    );
    write_post(
        temp.path(),
        "about.md",
        "id = 2\ntitle = \"About\"\nkind = \"page\"\npublished = \"2025-01-17T10:00:00Z\"",
        "About us.",
    );

    sitemeta_cmd()
        .current_dir(temp.path())
        .arg("sitemap")
        .assert()
        .success()
        .stdout(predicate::str::contains("<sitemapindex"))
        .stdout(predicate::str::contains(
            "<loc>https://example.com/sitemap-posts.xml</loc>",
        ))
        .stdout(predicate::str::contains(
            "<loc>https://example.com/sitemap-pages.xml</loc>",
        ))
        // No terms are registered yet
        .stdout(predicate::str::contains("sitemap-categories.xml").not());
}

#[test]
fn test_sitemap_posts_section() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    write_post(
        temp.path(),
        "hello-world.md",
        "id = 1\ntitle = \"Hello World\"\npublished = \"2025-01-17T10:00:00Z\"",
        "Body.",
    );
    write_post(
        temp.path(),
        "secret.md",
        "id = 2\ntitle = \"Secret\"\nstatus = \"draft\"\npublished = \"2025-01-17T10:00:00Z\"",
        "Hidden.",
    );

    sitemeta_cmd()
        .current_dir(temp.path())
        .args(["sitemap", "posts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<urlset"))
        .stdout(predicate::str::contains(
            "<loc>https://example.com/hello-world/</loc>",
        ))
        .stdout(predicate::str::contains(
            "<lastmod>2025-01-17T10:00:00+00:00</lastmod>",
        ))
        .stdout(predicate::str::contains("secret").not());
}

#[test]
fn test_sitemap_categories_section() {
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
        .args(["sitemap", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<loc>https://example.com/category/local-news/</loc>",
        ));
}

#[test]
fn test_sitemap_unknown_section_fails() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    sitemeta_cmd()
        .current_dir(temp.path())
        .args(["sitemap", "authors"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("authors"));
}
