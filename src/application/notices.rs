//! Notification relay use case
//!
//! A single-read-then-delete queue of depth one per post: the notice stored
//! after a term application is shown once and removed.

use crate::domain::content::PostId;
use crate::error::Result;
use crate::infrastructure::store::Notice;
use crate::infrastructure::FileSystemStore;

/// Service for the one-time notice banner
pub struct NoticesService {
    store: FileSystemStore,
}

impl NoticesService {
    pub fn new(store: FileSystemStore) -> Self {
        NoticesService { store }
    }

    /// Read and clear the pending notice for a post. The post must exist.
    pub fn take(&self, post_id: u64) -> Result<Option<Notice>> {
        let id = PostId(post_id);
        self.store.load_post(id)?;
        self.store.take_notice(id)
    }
}
