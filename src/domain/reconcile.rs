//! Term reconciliation
//!
//! Maps comma-separated, human-readable category/tag names onto taxonomy
//! terms and applies them to a post. Each name is resolved independently
//! (looked up, or created when auto-create is enabled) and per-name failures
//! are collected into the returned report instead of aborting the call: the
//! routine is total and always yields a best-effort result.

use crate::domain::content::PostId;
use crate::domain::term::{TaxonomyKind, Term, TermId};
use crate::error::Result;
use serde::Serialize;

/// Term and assignment operations the reconciler needs from the host store.
///
/// Lookup identity is the normalized slug for categories and the exact name
/// for tags; implementations own that normalization.
pub trait TermStore {
    fn find_term(&self, name: &str, kind: TaxonomyKind) -> Result<Option<Term>>;

    /// Create a term, validating the name. The description marks the origin
    /// of auto-created terms.
    fn create_term(&mut self, name: &str, kind: TaxonomyKind, description: &str) -> Result<Term>;

    fn assigned_terms(&self, post_id: PostId, kind: TaxonomyKind) -> Result<Vec<TermId>>;

    fn set_assigned_terms(
        &mut self,
        post_id: PostId,
        kind: TaxonomyKind,
        term_ids: Vec<TermId>,
    ) -> Result<()>;
}

/// Input of one reconciliation run, constructed from CLI or API parameters
/// and discarded afterwards
#[derive(Debug, Clone)]
pub struct ReconcileRequest {
    pub post_id: PostId,
    pub categories_raw: String,
    pub tags_raw: String,
    pub replace_categories: bool,
    pub replace_tags: bool,
    pub auto_create: bool,
}

/// Per-taxonomy outcome: names that resolved, messages for names that did not
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaxonomyReport {
    pub success: Vec<String>,
    pub errors: Vec<String>,
}

impl TaxonomyReport {
    pub fn is_empty(&self) -> bool {
        self.success.is_empty() && self.errors.is_empty()
    }
}

/// Outcome of one reconciliation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    pub categories: TaxonomyReport,
    pub tags: TaxonomyReport,
}

impl ReconcileReport {
    pub fn success_count(&self) -> usize {
        self.categories.success.len() + self.tags.success.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.categories.errors.is_empty() || !self.tags.errors.is_empty()
    }

    /// All error messages, categories first
    pub fn all_errors(&self) -> Vec<String> {
        let mut errors = self.categories.errors.clone();
        errors.extend(self.tags.errors.clone());
        errors
    }
}

/// Why a single name failed to resolve. Never escapes as a hard error;
/// rendered into the report's `errors` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// Blank segments are filtered before resolution, so `reconcile` never
    /// produces this
    EmptyName,
    CreationFailed(String),
    NotFoundAndAutoCreateDisabled,
}

impl ResolutionError {
    /// Human-readable message for the report
    pub fn message(&self, name: &str, kind: TaxonomyKind) -> String {
        match self {
            ResolutionError::EmptyName => format!("{} name cannot be empty", kind.label()),
            ResolutionError::CreationFailed(reason) => {
                format!("Failed to create {} \"{}\": {}", kind.slug(), name, reason)
            }
            ResolutionError::NotFoundAndAutoCreateDisabled => format!(
                "{} \"{}\" does not exist and auto-creation is disabled",
                kind.label(),
                name
            ),
        }
    }
}

/// Reconcile a post's category and tag assignments against the raw inputs.
///
/// The two taxonomies are processed independently; a kind with an empty raw
/// string is skipped entirely. Per-name failures land in the report's
/// `errors` list; only assignment writes can fail the call as a whole.
pub fn reconcile(store: &mut dyn TermStore, request: &ReconcileRequest) -> Result<ReconcileReport> {
    let mut report = ReconcileReport::default();

    reconcile_kind(
        store,
        request.post_id,
        &request.categories_raw,
        TaxonomyKind::Category,
        request.replace_categories,
        request.auto_create,
        &mut report.categories,
    )?;

    reconcile_kind(
        store,
        request.post_id,
        &request.tags_raw,
        TaxonomyKind::Tag,
        request.replace_tags,
        request.auto_create,
        &mut report.tags,
    )?;

    Ok(report)
}

/// Split a raw comma-separated input into trimmed, non-blank names.
/// Order is preserved and duplicates are kept.
pub fn split_names(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

fn reconcile_kind(
    store: &mut dyn TermStore,
    post_id: PostId,
    raw: &str,
    kind: TaxonomyKind,
    replace: bool,
    auto_create: bool,
    report: &mut TaxonomyReport,
) -> Result<()> {
    if raw.trim().is_empty() {
        return Ok(());
    }

    let mut resolved_ids: Vec<TermId> = Vec::new();

    for name in split_names(raw) {
        match resolve_name(store, name, kind, auto_create) {
            Ok(term_id) => {
                resolved_ids.push(term_id);
                report.success.push(name.to_string());
            }
            Err(err) => report.errors.push(err.message(name, kind)),
        }
    }

    if resolved_ids.is_empty() {
        return Ok(());
    }

    let final_ids = if replace {
        dedup_preserving_order(resolved_ids)
    } else {
        let mut merged = store.assigned_terms(post_id, kind)?;
        merged.extend(resolved_ids);
        dedup_preserving_order(merged)
    };

    store.set_assigned_terms(post_id, kind, final_ids)
}

/// Resolve one name to a term id, creating the term when permitted.
///
/// Resolution is idempotent: a name created earlier in the same run is found
/// by lookup on its next occurrence.
fn resolve_name(
    store: &mut dyn TermStore,
    name: &str,
    kind: TaxonomyKind,
    auto_create: bool,
) -> std::result::Result<TermId, ResolutionError> {
    if name.is_empty() {
        return Err(ResolutionError::EmptyName);
    }

    let existing = store
        .find_term(name, kind)
        .map_err(|e| ResolutionError::CreationFailed(e.to_string()))?;

    if let Some(term) = existing {
        return Ok(term.id);
    }

    if !auto_create {
        return Err(ResolutionError::NotFoundAndAutoCreateDisabled);
    }

    let description = format!("Auto-created {}: {}", kind.slug(), name);
    store
        .create_term(name, kind, &description)
        .map(|term| term.id)
        .map_err(|e| ResolutionError::CreationFailed(e.to_string()))
}

fn dedup_preserving_order(ids: Vec<TermId>) -> Vec<TermId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}
