//! Project store service.
//!
//! # Responsibility
//! - Own the in-memory `ProjectDocument` and be its only mutator.
//! - Hold the title display board the view renders.
//! - Save/load the document through a `KeyValueStore` under one fixed key.
//! - Append, remove and render comments.
//!
//! # Invariants
//! - A failed `save` or `load` leaves the document and title board untouched.
//! - Persisted titles are never blank.
//! - Comment order is insertion order; indices in renders are 0-based.

use crate::config::ShellConfig;
use crate::model::mode::{EditableTitle, TitleField};
use crate::model::project::{
    normalize_title, Comment, CommentValidationError, DocumentValidationError, ProjectDocument,
};
use crate::repo::kv_repo::{KeyValueStore, KvError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::Range;
use std::time::Instant;

/// Display format for comment timestamps.
const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Errors from project store operations.
///
/// Every variant is recoverable; the shell reports them as notifications.
#[derive(Debug)]
pub enum ProjectStoreError {
    /// Storage backend read or write failed.
    Storage(KvError),
    /// Document could not be encoded.
    Encode(serde_json::Error),
    /// No document is stored under the project key.
    NothingToLoad,
    /// Stored text is not a JSON project document.
    Decode(serde_json::Error),
    /// Stored text decodes but breaks document invariants.
    Invalid(DocumentValidationError),
    /// Comment input rejected.
    CommentRejected(CommentValidationError),
    /// Caller passed an index that is not in the current render.
    CommentIndexOutOfRange { index: usize, len: usize },
}

impl ProjectStoreError {
    /// Whether the stored document exists but cannot be used.
    pub fn is_corrupted_data(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Invalid(_))
    }
}

impl Display for ProjectStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode project: {err}"),
            Self::NothingToLoad => write!(f, "no saved project found"),
            Self::Decode(err) => write!(f, "stored project is not valid JSON: {err}"),
            Self::Invalid(err) => write!(f, "stored project is invalid: {err}"),
            Self::CommentRejected(err) => write!(f, "{err}"),
            Self::CommentIndexOutOfRange { index, len } => {
                write!(f, "comment index {index} out of range for {len} comments")
            }
        }
    }
}

impl Error for ProjectStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) | Self::Decode(err) => Some(err),
            Self::Invalid(err) => Some(err),
            Self::CommentRejected(err) => Some(err),
            Self::NothingToLoad | Self::CommentIndexOutOfRange { .. } => None,
        }
    }
}

impl From<KvError> for ProjectStoreError {
    fn from(value: KvError) -> Self {
        Self::Storage(value)
    }
}

impl From<CommentValidationError> for ProjectStoreError {
    fn from(value: CommentValidationError) -> Self {
        Self::CommentRejected(value)
    }
}

/// Display state of one title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSlot {
    text: String,
    default_label: String,
    editing: bool,
    all_selected: bool,
}

impl TitleSlot {
    fn new(label: &str) -> Self {
        Self {
            text: label.to_string(),
            default_label: label.to_string(),
            editing: false,
            all_selected: false,
        }
    }

    /// Currently displayed text, possibly an unconfirmed draft.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Label recorded at construction, before any edit.
    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Selected character range while the whole content is selected.
    pub fn selection(&self) -> Option<Range<usize>> {
        (self.editing && self.all_selected).then(|| 0..self.text.chars().count())
    }
}

/// Display board for the three section titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBoard {
    tree: TitleSlot,
    notes: TitleSlot,
    discussion: TitleSlot,
    focused: Option<EditableTitle>,
}

impl TitleBoard {
    fn new(config: &ShellConfig) -> Self {
        let labels = config.labels.normalized();
        Self {
            tree: TitleSlot::new(&labels.tree),
            notes: TitleSlot::new(&labels.notes),
            discussion: TitleSlot::new(&labels.discussion),
            focused: None,
        }
    }

    pub fn slot(&self, field: TitleField) -> &TitleSlot {
        match field {
            TitleField::Tree => &self.tree,
            TitleField::Notes => &self.notes,
            TitleField::Discussion => &self.discussion,
        }
    }

    fn slot_mut(&mut self, field: TitleField) -> &mut TitleSlot {
        match field {
            TitleField::Tree => &mut self.tree,
            TitleField::Notes => &mut self.notes,
            TitleField::Discussion => &mut self.discussion,
        }
    }

    /// Field holding input focus, if any.
    pub fn focused(&self) -> Option<EditableTitle> {
        self.focused
    }

    /// Normalized value each slot would persist as right now.
    fn captured(&self, field: TitleField) -> String {
        let slot = self.slot(field);
        normalize_title(&slot.text, &slot.default_label)
    }

    fn show_document(&mut self, document: &ProjectDocument) {
        for field in TitleField::ALL {
            let slot = self.slot_mut(field);
            slot.text = document.title(field).to_string();
            slot.editing = false;
            slot.all_selected = false;
        }
        self.focused = None;
    }
}

/// One rendered comment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRow {
    pub display_text: String,
    pub timestamp_display: String,
    /// Position to pass back to `delete_comment`.
    pub index: usize,
}

/// Rendered comment list; `Empty` is reported distinctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentListView {
    Empty,
    Populated(Vec<CommentRow>),
}

impl CommentListView {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn rows(&self) -> &[CommentRow] {
        match self {
            Self::Empty => &[],
            Self::Populated(rows) => rows,
        }
    }
}

/// Summary of a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveReport {
    pub bytes: usize,
    pub comments: usize,
}

/// Summary of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub bytes: usize,
    pub comments: usize,
}

/// Owner of the project document and its persistence.
pub struct ProjectStore<S: KeyValueStore> {
    storage: S,
    project_key: String,
    document: ProjectDocument,
    titles: TitleBoard,
}

impl<S: KeyValueStore> ProjectStore<S> {
    /// Creates a store whose document and title board start from the
    /// configured labels.
    pub fn new(storage: S, config: &ShellConfig) -> Self {
        let titles = TitleBoard::new(config);
        let document = ProjectDocument::with_titles(
            titles.tree.text.clone(),
            titles.notes.text.clone(),
            titles.discussion.text.clone(),
        );
        Self {
            storage,
            project_key: config.project_key.clone(),
            document,
            titles,
        }
    }

    pub fn document(&self) -> &ProjectDocument {
        &self.document
    }

    pub fn titles(&self) -> &TitleBoard {
        &self.titles
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Serializes the displayed titles plus current comments/nodes and
    /// writes them under the project key.
    ///
    /// The in-memory document only adopts the captured titles after the
    /// write succeeds. Mode transitions are the caller's job.
    ///
    /// # Errors
    /// - `Encode` when serialization fails.
    /// - `Storage` when the backend write fails.
    pub fn save(&mut self) -> Result<SaveReport, ProjectStoreError> {
        let started_at = Instant::now();
        let mut candidate = self.document.clone();
        for field in TitleField::ALL {
            candidate.set_title(field, self.titles.captured(field));
        }

        let encoded = serde_json::to_string(&candidate).map_err(|err| {
            error!("event=project_save module=store status=error error_code=encode_failed error={err}");
            ProjectStoreError::Encode(err)
        })?;

        if let Err(err) = self.storage.set(&self.project_key, &encoded) {
            error!(
                "event=project_save module=store status=error error_code=write_failed duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }

        let report = SaveReport {
            bytes: encoded.len(),
            comments: candidate.comments.len(),
        };
        self.document = candidate;
        info!(
            "event=project_save module=store status=ok bytes={} comments={} duration_ms={}",
            report.bytes,
            report.comments,
            started_at.elapsed().as_millis()
        );
        Ok(report)
    }

    /// Replaces the document with the one stored under the project key and
    /// pushes its titles to the board.
    ///
    /// # Errors
    /// - `NothingToLoad` when the key is absent.
    /// - `Decode`/`Invalid` when the stored text is corrupted.
    /// - `Storage` when the backend read fails.
    pub fn load(&mut self) -> Result<LoadReport, ProjectStoreError> {
        let started_at = Instant::now();
        let stored = match self.storage.get(&self.project_key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                info!("event=project_load module=store status=empty");
                return Err(ProjectStoreError::NothingToLoad);
            }
            Err(err) => {
                error!("event=project_load module=store status=error error_code=read_failed error={err}");
                return Err(err.into());
            }
        };

        let document = decode_document(&stored).inspect_err(|err| {
            warn!(
                "event=project_load module=store status=error error_code=corrupted_data bytes={} error={err}",
                stored.len()
            );
        })?;

        let report = LoadReport {
            bytes: stored.len(),
            comments: document.comments.len(),
        };
        self.titles.show_document(&document);
        self.document = document;
        info!(
            "event=project_load module=store status=ok bytes={} comments={} duration_ms={}",
            report.bytes,
            report.comments,
            started_at.elapsed().as_millis()
        );
        Ok(report)
    }

    /// Appends a comment stamped with the current time.
    ///
    /// Returns the new comment's index.
    pub fn add_comment(&mut self, text: &str) -> Result<usize, ProjectStoreError> {
        let comment = Comment::new(text).inspect_err(|err| {
            info!("event=comment_add module=store status=rejected reason={err}");
        })?;
        Ok(self.append_comment(comment))
    }

    /// Appends an already-built comment, e.g. one stamped with `Comment::at`.
    ///
    /// # Errors
    /// - `CommentRejected` when the comment breaks the rules `add_comment`
    ///   enforces. Nothing is appended.
    pub fn push_comment(&mut self, comment: Comment) -> Result<usize, ProjectStoreError> {
        comment.check().inspect_err(|err| {
            info!("event=comment_add module=store status=rejected reason={err}");
        })?;
        Ok(self.append_comment(comment))
    }

    fn append_comment(&mut self, comment: Comment) -> usize {
        let chars = comment.text.chars().count();
        self.document.comments.push(comment);
        let index = self.document.comments.len() - 1;
        info!("event=comment_add module=store status=ok index={index} chars={chars}");
        index
    }

    /// Removes the comment at `index` (display order).
    ///
    /// # Errors
    /// - `CommentIndexOutOfRange` when `index` was not produced by the
    ///   current render. Nothing is removed.
    pub fn delete_comment(&mut self, index: usize) -> Result<Comment, ProjectStoreError> {
        let len = self.document.comments.len();
        if index >= len {
            error!("event=comment_delete module=store status=error error_code=index_out_of_range index={index} len={len}");
            return Err(ProjectStoreError::CommentIndexOutOfRange { index, len });
        }
        let removed = self.document.comments.remove(index);
        info!(
            "event=comment_delete module=store status=ok index={index} remaining={}",
            len - 1
        );
        Ok(removed)
    }

    /// Renders comments in display order.
    pub fn render_comments(&self) -> CommentListView {
        if self.document.comments.is_empty() {
            return CommentListView::Empty;
        }
        let rows = self
            .document
            .comments
            .iter()
            .enumerate()
            .map(|(index, comment)| CommentRow {
                display_text: comment.text.clone(),
                timestamp_display: comment
                    .created_at()
                    .map(|at| at.format(TIMESTAMP_DISPLAY_FORMAT).to_string())
                    .unwrap_or_else(|| comment.timestamp.clone()),
                index,
            })
            .collect();
        CommentListView::Populated(rows)
    }

    pub(crate) fn begin_title_edit(&mut self, field: EditableTitle) {
        let slot = self.titles.slot_mut(field.field());
        slot.editing = true;
        slot.all_selected = true;
        self.titles.focused = Some(field);
    }

    pub(crate) fn replace_title_draft(&mut self, field: EditableTitle, text: &str) -> bool {
        let slot = self.titles.slot_mut(field.field());
        if !slot.editing {
            return false;
        }
        slot.text = text.to_string();
        slot.all_selected = false;
        true
    }

    /// Normalizes the displayed text, writes it into the document and ends
    /// editing. Returns the committed value.
    pub(crate) fn commit_title(&mut self, field: EditableTitle) -> String {
        let value = self.titles.captured(field.field());
        let slot = self.titles.slot_mut(field.field());
        slot.text = value.clone();
        slot.editing = false;
        slot.all_selected = false;
        if self.titles.focused == Some(field) {
            self.titles.focused = None;
        }
        self.document.set_title(field.field(), value.clone());
        value
    }

    /// Shows the recorded default label again and ends editing. The document
    /// is left as it was.
    pub(crate) fn revert_title(&mut self, field: EditableTitle) -> bool {
        let slot = self.titles.slot_mut(field.field());
        if !slot.editing {
            return false;
        }
        slot.text = slot.default_label.clone();
        slot.editing = false;
        slot.all_selected = false;
        if self.titles.focused == Some(field) {
            self.titles.focused = None;
        }
        true
    }
}

fn decode_document(stored: &str) -> Result<ProjectDocument, ProjectStoreError> {
    let document: ProjectDocument =
        serde_json::from_str(stored).map_err(ProjectStoreError::Decode)?;
    document.validate().map_err(ProjectStoreError::Invalid)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::{ProjectStore, ProjectStoreError};
    use crate::config::ShellConfig;
    use crate::model::mode::{EditableTitle, TitleField};
    use crate::model::project::{Comment, CommentValidationError};
    use crate::repo::kv_repo::{KeyValueStore, MemoryKeyValueStore};
    use chrono::{TimeZone, Utc};

    fn store() -> ProjectStore<MemoryKeyValueStore> {
        ProjectStore::new(MemoryKeyValueStore::new(), &ShellConfig::default())
    }

    #[test]
    fn new_store_shows_configured_labels() {
        let store = store();
        assert_eq!(store.document().tree_title, "Tree");
        assert_eq!(store.titles().slot(TitleField::Notes).text(), "Notes");
        assert_eq!(
            store.titles().slot(TitleField::Discussion).default_label(),
            "Discussion"
        );
        assert!(store.render_comments().is_empty());
    }

    #[test]
    fn save_captures_blank_draft_as_default_label() {
        let mut store = store();
        store.begin_title_edit(EditableTitle::Tree);
        assert!(store.replace_title_draft(EditableTitle::Tree, "   "));

        store.save().expect("save should succeed");
        assert_eq!(store.document().tree_title, "Tree");

        let raw = store
            .storage()
            .get("schemaTreeProject")
            .expect("read should succeed")
            .expect("document should be stored");
        assert!(raw.contains("\"treeTitle\":\"Tree\""));
    }

    #[test]
    fn timestamp_display_is_utc_and_index_follows_order() {
        let mut store = store();
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        store.push_comment(Comment::at("first", at).unwrap()).unwrap();
        store.push_comment(Comment::at("second", at).unwrap()).unwrap();

        let view = store.render_comments();
        let rows = view.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].display_text, "first");
        assert_eq!(rows[0].timestamp_display, "2024-01-01 00:00:00 UTC");
        assert_eq!(rows[1].index, 1);
    }

    #[test]
    fn push_comment_rejects_unchecked_comments() {
        let mut store = store();
        let padded = Comment {
            text: "  padded ".to_string(),
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let err = store.push_comment(padded).unwrap_err();
        assert!(matches!(
            err,
            ProjectStoreError::CommentRejected(CommentValidationError::Untrimmed)
        ));
        assert!(store.document().comments.is_empty());
    }

    #[test]
    fn stored_comments_with_odd_timestamps_render_verbatim() {
        let mut store = store();
        store
            .storage()
            .set(
                "schemaTreeProject",
                r#"{"treeTitle":"T","notesTitle":"N","discussionTitle":"D",
                    "comments":[{"text":"legacy","timestamp":"Mon Jan 01 2024"}]}"#,
            )
            .unwrap();
        store.load().unwrap();

        let view = store.render_comments();
        assert_eq!(view.rows()[0].timestamp_display, "Mon Jan 01 2024");
    }

    #[test]
    fn delete_out_of_range_is_rejected_without_mutation() {
        let mut store = store();
        store.add_comment("only").unwrap();
        let err = store.delete_comment(3).unwrap_err();
        assert!(matches!(
            err,
            ProjectStoreError::CommentIndexOutOfRange { index: 3, len: 1 }
        ));
        assert_eq!(store.document().comments.len(), 1);
    }

    #[test]
    fn revert_requires_active_edit() {
        let mut store = store();
        assert!(!store.revert_title(EditableTitle::Notes));
        store.begin_title_edit(EditableTitle::Notes);
        assert_eq!(
            store.titles().slot(TitleField::Notes).selection(),
            Some(0..5)
        );
        store.replace_title_draft(EditableTitle::Notes, "Draft");
        assert!(store.revert_title(EditableTitle::Notes));
        assert_eq!(store.titles().slot(TitleField::Notes).text(), "Notes");
        assert_eq!(store.titles().focused(), None);
    }
}
