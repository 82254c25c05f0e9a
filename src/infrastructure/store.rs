//! File system content store
//!
//! Layout under the site root:
//!   content/*.md          posts and pages, TOML front matter between +++ lines
//!   .sitemeta/config.toml site configuration
//!   .sitemeta/terms.toml  taxonomy term registry
//!   .sitemeta/notices.toml pending one-time notices per post

use crate::domain::content::{Post, PostId, PostKind, PostStatus, SeoMeta};
use crate::domain::reconcile::TermStore;
use crate::domain::term::{slugify, validate_term_name, TaxonomyKind, Term, TermId};
use crate::error::{Result, SiteMetaError};
use crate::infrastructure::config::{SiteConfig, CONFIG_DIR};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const CONTENT_DIR: &str = "content";
const TERMS_FILE: &str = "terms.toml";
const NOTICES_FILE: &str = "notices.toml";
const FRONT_MATTER_DELIMITER: &str = "+++";

/// A pending one-time notice for a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    #[serde(default)]
    pub success_count: usize,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl Notice {
    pub fn is_empty(&self) -> bool {
        self.success_count == 0 && self.errors.is_empty()
    }
}

/// Abstract store for site operations
pub trait ContentStore {
    /// Get the root directory of this store
    fn root(&self) -> &Path;

    /// Load configuration from .sitemeta/config.toml
    fn load_config(&self) -> Result<SiteConfig>;

    /// Save configuration to .sitemeta/config.toml
    fn save_config(&self, config: &SiteConfig) -> Result<()>;

    /// Check if the .sitemeta directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .sitemeta and content directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of the content store
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

impl FileSystemStore {
    /// Create a new store with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }

    /// Discover the site root by walking up from the current directory.
    /// First checks the SITEMETA_ROOT environment variable.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SITEMETA_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_site_dir(&path) {
                return Ok(FileSystemStore::new(path));
            } else {
                return Err(SiteMetaError::Config(format!(
                    "SITEMETA_ROOT is set to '{}' but no .sitemeta directory found there",
                    path.display()
                )));
            }
        }

        let start = std::env::current_dir()?;
        let mut current = start.clone();
        loop {
            if Self::has_site_dir(&current) {
                return Ok(FileSystemStore::new(current));
            }
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(SiteMetaError::NotSiteDirectory(start)),
            }
        }
    }

    fn has_site_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    fn content_dir(&self) -> PathBuf {
        self.root.join(CONTENT_DIR)
    }

    fn terms_path(&self) -> PathBuf {
        self.root.join(CONFIG_DIR).join(TERMS_FILE)
    }

    fn notices_path(&self) -> PathBuf {
        self.root.join(CONFIG_DIR).join(NOTICES_FILE)
    }

    // -- posts --------------------------------------------------------------

    /// All posts with the files they were read from
    fn scan_posts(&self) -> Result<Vec<(PathBuf, Post)>> {
        let content_dir = self.content_dir();
        if !content_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        for entry in WalkDir::new(&content_dir)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || path.extension().map(|e| e != "md").unwrap_or(true) {
                continue;
            }
            let contents = fs::read_to_string(path)?;
            let post = parse_post(&contents, path)?;
            posts.push((path.to_path_buf(), post));
        }
        posts.sort_by_key(|(_, post)| post.id);
        Ok(posts)
    }

    /// List all posts, ordered by id
    pub fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.scan_posts()?.into_iter().map(|(_, post)| post).collect())
    }

    /// Load a single post by id
    pub fn load_post(&self, id: PostId) -> Result<Post> {
        self.scan_posts()?
            .into_iter()
            .map(|(_, post)| post)
            .find(|post| post.id == id)
            .ok_or(SiteMetaError::PostNotFound(id.0))
    }

    /// Write a post back, reusing its existing file when one exists
    pub fn save_post(&self, post: &Post) -> Result<()> {
        let path = self
            .scan_posts()?
            .into_iter()
            .find(|(_, existing)| existing.id == post.id)
            .map(|(path, _)| path)
            .unwrap_or_else(|| self.content_dir().join(format!("{}.md", post.slug)));

        fs::create_dir_all(self.content_dir())?;
        fs::write(path, serialize_post(post)?)?;
        Ok(())
    }

    // -- terms --------------------------------------------------------------

    fn load_terms(&self) -> Result<TermRegistry> {
        let path = self.terms_path();
        if !path.exists() {
            return Ok(TermRegistry::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn save_terms(&self, registry: &TermRegistry) -> Result<()> {
        fs::write(self.terms_path(), toml::to_string_pretty(registry)?)?;
        Ok(())
    }

    /// Look up a term by id
    pub fn term(&self, id: TermId) -> Result<Option<Term>> {
        Ok(self.load_terms()?.terms.into_iter().find(|t| t.id == id))
    }

    /// Look up a term by slug within a taxonomy
    pub fn term_by_slug(&self, slug: &str, kind: TaxonomyKind) -> Result<Option<Term>> {
        Ok(self
            .load_terms()?
            .terms
            .into_iter()
            .find(|t| t.kind == kind && t.slug == slug))
    }

    /// All registered terms
    pub fn all_terms(&self) -> Result<Vec<Term>> {
        Ok(self.load_terms()?.terms)
    }

    /// Re-parent a category in the registry
    pub fn set_term_parent(&self, id: TermId, parent: Option<TermId>) -> Result<()> {
        let mut registry = self.load_terms()?;
        let term = registry
            .terms
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| SiteMetaError::TermNotFound(id.to_string()))?;
        term.parent = parent;
        self.save_terms(&registry)
    }

    // -- notices ------------------------------------------------------------

    fn load_notices(&self) -> Result<NoticesFile> {
        let path = self.notices_path();
        if !path.exists() {
            return Ok(NoticesFile::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn save_notices(&self, notices: &NoticesFile) -> Result<()> {
        fs::write(self.notices_path(), toml::to_string_pretty(notices)?)?;
        Ok(())
    }

    /// Store a pending notice for a post, replacing any previous one.
    /// An empty notice clears the pending state instead.
    pub fn store_notice(&self, post_id: PostId, notice: Notice) -> Result<()> {
        let mut notices = self.load_notices()?;
        if notice.is_empty() {
            notices.posts.remove(&post_id.to_string());
        } else {
            notices.posts.insert(post_id.to_string(), notice);
        }
        self.save_notices(&notices)
    }

    /// Read and delete the pending notice for a post, if any.
    /// Each notice is displayed at most once.
    pub fn take_notice(&self, post_id: PostId) -> Result<Option<Notice>> {
        let mut notices = self.load_notices()?;
        let taken = notices.posts.remove(&post_id.to_string());
        if taken.is_some() {
            self.save_notices(&notices)?;
        }
        Ok(taken)
    }
}

impl ContentStore for FileSystemStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<SiteConfig> {
        SiteConfig::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &SiteConfig) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_site_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        fs::create_dir_all(self.root.join(CONFIG_DIR))?;
        fs::create_dir_all(self.content_dir())?;
        if !self.terms_path().exists() {
            self.save_terms(&TermRegistry::default())?;
        }
        Ok(())
    }
}

impl TermStore for FileSystemStore {
    fn find_term(&self, name: &str, kind: TaxonomyKind) -> Result<Option<Term>> {
        let registry = self.load_terms()?;
        let found = match kind {
            // Categories match on the normalized slug
            TaxonomyKind::Category => {
                let slug = slugify(name);
                registry
                    .terms
                    .into_iter()
                    .find(|t| t.kind == kind && t.slug == slug)
            }
            // Tags match on the exact name
            TaxonomyKind::Tag => registry
                .terms
                .into_iter()
                .find(|t| t.kind == kind && t.name == name),
        };
        Ok(found)
    }

    fn create_term(&mut self, name: &str, kind: TaxonomyKind, description: &str) -> Result<Term> {
        let base = validate_term_name(name).map_err(SiteMetaError::InvalidTermName)?;

        let mut registry = self.load_terms()?;
        let slug = unique_slug(&base, kind, &registry.terms);
        let term = Term {
            id: TermId(registry.next_id),
            name: name.trim().to_string(),
            slug,
            kind,
            parent: None,
            description: description.to_string(),
        };
        registry.next_id += 1;
        registry.terms.push(term.clone());
        self.save_terms(&registry)?;
        Ok(term)
    }

    fn assigned_terms(&self, post_id: PostId, kind: TaxonomyKind) -> Result<Vec<TermId>> {
        let post = self.load_post(post_id)?;
        Ok(match kind {
            TaxonomyKind::Category => post.categories,
            TaxonomyKind::Tag => post.tags,
        })
    }

    fn set_assigned_terms(
        &mut self,
        post_id: PostId,
        kind: TaxonomyKind,
        term_ids: Vec<TermId>,
    ) -> Result<()> {
        let mut post = self.load_post(post_id)?;
        match kind {
            TaxonomyKind::Category => post.categories = term_ids,
            TaxonomyKind::Tag => post.tags = term_ids,
        }
        self.save_post(&post)
    }
}

/// First free slug within a taxonomy: the base, then base-2, base-3 and so
/// on. Tags match on exact name, so distinct tags like "Rust" and "rust"
/// would otherwise collapse onto one archive URL.
fn unique_slug(base: &str, kind: TaxonomyKind, terms: &[Term]) -> String {
    let taken = |slug: &str| terms.iter().any(|t| t.kind == kind && t.slug == slug);
    if !taken(base) {
        return base.to_string();
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Taxonomy term registry persisted to .sitemeta/terms.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TermRegistry {
    next_id: u64,
    #[serde(default)]
    terms: Vec<Term>,
}

impl Default for TermRegistry {
    fn default() -> Self {
        TermRegistry {
            next_id: 1,
            terms: Vec::new(),
        }
    }
}

/// Pending notices keyed by post id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct NoticesFile {
    #[serde(default)]
    posts: BTreeMap<String, Notice>,
}

/// Post front matter as stored on disk
#[derive(Debug, Serialize, Deserialize)]
struct FrontMatter {
    id: u64,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(default = "default_kind")]
    kind: PostKind,
    #[serde(default = "default_status")]
    status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<u64>,
    #[serde(default)]
    author: String,
    published: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    modified: Option<DateTime<Utc>>,
    #[serde(default)]
    comment_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    categories: Vec<TermId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<TermId>,
    #[serde(default, skip_serializing_if = "seo_is_default")]
    seo: SeoMeta,
}

fn default_kind() -> PostKind {
    PostKind::Post
}

fn default_status() -> PostStatus {
    PostStatus::Published
}

fn seo_is_default(seo: &SeoMeta) -> bool {
    *seo == SeoMeta::default()
}

/// Parse a post file: TOML front matter between `+++` lines, markdown after
fn parse_post(contents: &str, path: &Path) -> Result<Post> {
    let front_matter_error = |message: String| SiteMetaError::FrontMatter {
        file: path.display().to_string(),
        message,
    };

    let mut lines = contents.lines();
    if lines.next().map(str::trim) != Some(FRONT_MATTER_DELIMITER) {
        return Err(front_matter_error(format!(
            "expected opening '{}' on the first line",
            FRONT_MATTER_DELIMITER
        )));
    }

    let mut front = String::new();
    let mut body = String::new();
    let mut in_front = true;
    for line in lines {
        if in_front && line.trim() == FRONT_MATTER_DELIMITER {
            in_front = false;
            continue;
        }
        if in_front {
            front.push_str(line);
            front.push('\n');
        } else {
            body.push_str(line);
            body.push('\n');
        }
    }
    if in_front {
        return Err(front_matter_error(format!(
            "missing closing '{}'",
            FRONT_MATTER_DELIMITER
        )));
    }

    let matter: FrontMatter =
        toml::from_str(&front).map_err(|e| front_matter_error(e.to_string()))?;

    let slug = matter
        .slug
        .unwrap_or_else(|| slugify(&matter.title));

    Ok(Post {
        id: PostId(matter.id),
        title: matter.title,
        slug,
        kind: matter.kind,
        status: matter.status,
        parent: matter.parent.map(PostId),
        author: matter.author,
        published: matter.published,
        modified: matter.modified.unwrap_or(matter.published),
        comment_count: matter.comment_count,
        excerpt: matter.excerpt,
        content: body.trim_start_matches('\n').to_string(),
        seo: matter.seo,
        categories: matter.categories,
        tags: matter.tags,
    })
}

/// Serialize a post back into its on-disk form
fn serialize_post(post: &Post) -> Result<String> {
    let matter = FrontMatter {
        id: post.id.0,
        title: post.title.clone(),
        slug: Some(post.slug.clone()),
        kind: post.kind,
        status: post.status,
        parent: post.parent.map(|p| p.0),
        author: post.author.clone(),
        published: post.published,
        modified: Some(post.modified),
        comment_count: post.comment_count,
        excerpt: post.excerpt.clone(),
        categories: post.categories.clone(),
        tags: post.tags.clone(),
        seo: post.seo.clone(),
    };

    let front = toml::to_string_pretty(&matter)?;
    Ok(format!(
        "{delim}\n{front}{delim}\n\n{body}",
        delim = FRONT_MATTER_DELIMITER,
        front = front,
        body = post.content
    ))
}
