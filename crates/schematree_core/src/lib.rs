//! Core logic for the SchemaTree project shell.
//! This crate owns every invariant of the mode machine, title editing and
//! project persistence; front-ends only dispatch commands and render snapshots.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ShellConfig, TitleLabels, DEFAULT_PROJECT_KEY, DEFAULT_THEME_KEY};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::mode::{EditableTitle, Mode, TitleField};
pub use model::project::{
    Comment, CommentValidationError, DocumentValidationError, ProjectDocument, MAX_COMMENT_CHARS,
};
pub use repo::kv_repo::{
    KeyValueStore, KvError, KvResult, MemoryKeyValueStore, SqliteKeyValueStore,
};
pub use service::comment_list::CommentListManager;
pub use service::controls::{controls_for, Control, ControlSet, ToolAction, ToolPanels};
pub use service::mode_controller::{ModeController, Transition};
pub use service::notifications::{Notification, NotificationCenter, NotificationLevel};
pub use service::project_store::{
    CommentListView, CommentRow, LoadReport, ProjectStore, ProjectStoreError, SaveReport,
};
pub use service::shell::{Shell, ShellCommand, ShellSnapshot, TitleView};
pub use service::theme::Theme;
pub use service::title_editor::TitleEditor;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
