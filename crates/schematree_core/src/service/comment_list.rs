//! Comment list manager.
//!
//! # Responsibility
//! - Hold the pending comment input.
//! - Delegate add/delete/render to the project store.
//!
//! # Invariants
//! - The draft is cleared only when the store accepts the comment.

use crate::repo::kv_repo::KeyValueStore;
use crate::service::project_store::{CommentListView, ProjectStore, ProjectStoreError};

/// Façade pairing the comment input field with the store's comment list.
#[derive(Debug, Default)]
pub struct CommentListManager {
    draft: String,
}

impl CommentListManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pending, unsubmitted input.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submits the draft. Returns the index of the new comment.
    ///
    /// On rejection the draft is left exactly as typed.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &mut ProjectStore<S>,
    ) -> Result<usize, ProjectStoreError> {
        let index = store.add_comment(&self.draft)?;
        self.draft.clear();
        Ok(index)
    }

    pub fn delete<S: KeyValueStore>(
        &self,
        store: &mut ProjectStore<S>,
        index: usize,
    ) -> Result<(), ProjectStoreError> {
        store.delete_comment(index).map(|_| ())
    }

    pub fn render<S: KeyValueStore>(&self, store: &ProjectStore<S>) -> CommentListView {
        store.render_comments()
    }
}
