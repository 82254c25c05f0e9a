use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn sitemeta_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sitemeta").unwrap();
    cmd.env_remove("SITEMETA_ROOT");
    cmd
}

/// Write a post file under content/ with the given front matter lines and body
#[allow(dead_code)]
pub fn write_post(root: &Path, filename: &str, front_matter: &str, body: &str) {
    let content_dir = root.join("content");
    fs::create_dir_all(&content_dir).unwrap();
    fs::write(
        content_dir.join(filename),
        format!("+++\n{}\n+++\n\n{}\n", front_matter.trim(), body),
    )
    .unwrap();
}
