//! Term application use case
//!
//! Wraps the reconciler for the CLI entry point: verifies the target post,
//! runs the reconciliation, stores the one-time notice for the next editing
//! surface render, and builds the response envelope.

use crate::domain::content::PostId;
use crate::domain::reconcile::{reconcile, ReconcileReport, ReconcileRequest};
use crate::error::Result;
use crate::infrastructure::store::Notice;
use crate::infrastructure::FileSystemStore;
use serde_json::{json, Value};

/// Parameters of one term application. `auto_create` defaults to enabled,
/// the replace flags to disabled.
#[derive(Debug, Clone)]
pub struct ApplyTermsOptions {
    pub post_id: u64,
    pub categories: String,
    pub tags: String,
    pub replace_categories: bool,
    pub replace_tags: bool,
    pub auto_create: bool,
}

/// Outcome of a term application
#[derive(Debug, Clone)]
pub struct TermApplication {
    pub post_id: u64,
    pub report: ReconcileReport,
    pub message: String,
}

impl TermApplication {
    /// JSON envelope mirroring the API response shape
    pub fn envelope(&self) -> Value {
        json!({
            "success": true,
            "post_id": self.post_id,
            "results": self.report,
            "message": self.message,
        })
    }
}

/// Service for applying category/tag inputs to a post
pub struct ApplyTermsService {
    store: FileSystemStore,
}

impl ApplyTermsService {
    pub fn new(store: FileSystemStore) -> Self {
        ApplyTermsService { store }
    }

    /// Execute the reconciliation and persist the pending notice.
    ///
    /// # Errors
    ///
    /// Returns `PostNotFound` when the target post does not exist; per-name
    /// resolution failures are reported inside the returned application, not
    /// as errors.
    pub fn execute(&mut self, options: ApplyTermsOptions) -> Result<TermApplication> {
        let post_id = PostId(options.post_id);

        // The reconciler assumes an existing post; surface missing ones here
        self.store.load_post(post_id)?;

        let request = ReconcileRequest {
            post_id,
            categories_raw: options.categories,
            tags_raw: options.tags,
            replace_categories: options.replace_categories,
            replace_tags: options.replace_tags,
            auto_create: options.auto_create,
        };

        let report = reconcile(&mut self.store, &request)?;

        // Pending notice for the next render of this post's editing surface.
        // An empty notice clears any stale pending state.
        self.store.store_notice(
            post_id,
            Notice {
                success_count: report.success_count(),
                errors: report.all_errors(),
            },
        )?;

        let message = format!(
            "Processed {} categories and {} tags for post {}",
            report.categories.success.len(),
            report.tags.success.len(),
            options.post_id
        );

        Ok(TermApplication {
            post_id: options.post_id,
            report,
            message,
        })
    }
}
