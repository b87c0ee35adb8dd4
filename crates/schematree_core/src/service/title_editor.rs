//! Title edit lifecycle.
//!
//! # Responsibility
//! - Start, update, confirm and cancel edits of the tree/notes titles.
//! - Feed confirmed values into the project store.
//!
//! # Invariants
//! - Edits only start in `Mode::Creation`.
//! - `confirm_edit` never leaves a title blank.
//! - The editor keeps no state; everything lives in the project store.

use crate::model::mode::{EditableTitle, Mode};
use crate::repo::kv_repo::KeyValueStore;
use crate::service::project_store::ProjectStore;
use log::debug;

/// Borrowing façade over the store's title board.
pub struct TitleEditor<'store, S: KeyValueStore> {
    mode: Mode,
    store: &'store mut ProjectStore<S>,
}

impl<'store, S: KeyValueStore> TitleEditor<'store, S> {
    pub fn new(mode: Mode, store: &'store mut ProjectStore<S>) -> Self {
        Self { mode, store }
    }

    /// Puts `field` into edit with focus and its full content selected.
    ///
    /// Returns `false` (and changes nothing) outside creation mode.
    pub fn begin_edit(&mut self, field: EditableTitle) -> bool {
        if !self.mode.allows_title_edit(field.field()) {
            debug!("event=title_edit module=title_editor status=ignored field={field} mode={}", self.mode);
            return false;
        }
        self.store.begin_title_edit(field);
        debug!("event=title_edit module=title_editor status=started field={field}");
        true
    }

    /// Replaces the displayed draft of a field that is in edit.
    ///
    /// Returns `false` when the field is not being edited.
    pub fn type_text(&mut self, field: EditableTitle, text: &str) -> bool {
        self.store.replace_title_draft(field, text)
    }

    /// Commits the displayed text: trimmed, or the recorded default label
    /// when blank. Ends editing and returns the committed title.
    pub fn confirm_edit(&mut self, field: EditableTitle) -> String {
        let value = self.store.commit_title(field);
        debug!(
            "event=title_edit module=title_editor status=confirmed field={field} chars={}",
            value.chars().count()
        );
        value
    }

    /// Discards the draft, shows the recorded default label and ends editing.
    ///
    /// Returns `false` when the field was not being edited.
    pub fn cancel_edit(&mut self, field: EditableTitle) -> bool {
        let reverted = self.store.revert_title(field);
        if reverted {
            debug!("event=title_edit module=title_editor status=cancelled field={field}");
        }
        reverted
    }
}
