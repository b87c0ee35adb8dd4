//! Shell state and command dispatcher.
//!
//! # Responsibility
//! - Own the whole application state: mode, project store, comment input,
//!   notifications and theme.
//! - Turn each `ShellCommand` into calls on the owning component.
//! - Report every recoverable failure as a notification.
//!
//! # Invariants
//! - One command runs to completion before the next is accepted.
//! - `dispatch` never panics and never propagates an error to the caller.
//! - The view re-pulls `snapshot()` after every dispatch; nothing is pushed.

use crate::config::ShellConfig;
use crate::model::mode::{EditableTitle, Mode, TitleField};
use crate::repo::kv_repo::KeyValueStore;
use crate::service::comment_list::CommentListManager;
use crate::service::controls::{controls_for, ControlSet, ToolAction};
use crate::service::mode_controller::ModeController;
use crate::service::notifications::{Notification, NotificationCenter, NotificationLevel};
use crate::service::project_store::{CommentListView, ProjectStore, ProjectStoreError};
use crate::service::theme::{load_theme, store_theme, Theme};
use crate::service::title_editor::TitleEditor;
use log::{debug, warn};

/// Discrete user actions the shell understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    EnterCreation,
    ExitCreation,
    Save,
    Load,
    BeginTitleEdit(EditableTitle),
    TypeTitle(EditableTitle, String),
    ConfirmTitleEdit(EditableTitle),
    CancelTitleEdit(EditableTitle),
    SetCommentDraft(String),
    SubmitComment,
    DeleteComment(usize),
    UseTool(ToolAction),
    ToggleTheme,
    DismissNotification(u64),
}

impl ShellCommand {
    /// Stable name for log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EnterCreation => "enter_creation",
            Self::ExitCreation => "exit_creation",
            Self::Save => "save",
            Self::Load => "load",
            Self::BeginTitleEdit(_) => "begin_title_edit",
            Self::TypeTitle(..) => "type_title",
            Self::ConfirmTitleEdit(_) => "confirm_title_edit",
            Self::CancelTitleEdit(_) => "cancel_title_edit",
            Self::SetCommentDraft(_) => "set_comment_draft",
            Self::SubmitComment => "submit_comment",
            Self::DeleteComment(_) => "delete_comment",
            Self::UseTool(_) => "use_tool",
            Self::ToggleTheme => "toggle_theme",
            Self::DismissNotification(_) => "dismiss_notification",
        }
    }
}

/// Render model of one title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleView {
    pub field: TitleField,
    pub text: String,
    pub editable: bool,
    pub editing: bool,
    pub focused: bool,
}

/// Everything the view draws, pulled after each dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSnapshot {
    pub mode: Mode,
    pub controls: ControlSet,
    pub titles: Vec<TitleView>,
    pub comments: CommentListView,
    pub comment_draft: String,
    pub notifications: Vec<Notification>,
    pub theme: Theme,
}

/// The application state, passed by `&mut` to every operation.
pub struct Shell<S: KeyValueStore> {
    config: ShellConfig,
    mode: ModeController,
    store: ProjectStore<S>,
    comments: CommentListManager,
    notifications: NotificationCenter,
    theme: Theme,
}

impl<S: KeyValueStore> Shell<S> {
    /// Builds a shell in initial mode and restores the stored theme.
    ///
    /// # Errors
    /// - Returns a readable message when `config` fails validation.
    pub fn new(storage: S, config: ShellConfig) -> Result<Self, String> {
        config.validate()?;
        let theme = load_theme(&storage, &config.theme_key);
        let store = ProjectStore::new(storage, &config);
        Ok(Self {
            config,
            mode: ModeController::new(),
            store,
            comments: CommentListManager::new(),
            notifications: NotificationCenter::new(),
            theme,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    pub fn store(&self) -> &ProjectStore<S> {
        &self.store
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Runs one command to completion.
    pub fn dispatch(&mut self, command: ShellCommand) {
        debug!(
            "event=dispatch module=shell command={} mode={}",
            command.name(),
            self.mode.mode()
        );
        match command {
            ShellCommand::EnterCreation => {
                self.mode.enter_creation();
            }
            ShellCommand::ExitCreation => {
                self.mode.exit_creation(&mut self.store);
            }
            ShellCommand::Save => self.save(),
            ShellCommand::Load => self.load(),
            ShellCommand::BeginTitleEdit(field) => {
                self.title_editor().begin_edit(field);
            }
            ShellCommand::TypeTitle(field, text) => {
                self.title_editor().type_text(field, &text);
            }
            ShellCommand::ConfirmTitleEdit(field) => {
                self.title_editor().confirm_edit(field);
            }
            ShellCommand::CancelTitleEdit(field) => {
                self.title_editor().cancel_edit(field);
            }
            ShellCommand::SetCommentDraft(text) => self.comments.set_draft(text),
            ShellCommand::SubmitComment => {
                if let Err(err) = self.comments.submit(&mut self.store) {
                    self.report_failure(NotificationLevel::Warning, "Comment rejected", &err);
                }
            }
            ShellCommand::DeleteComment(index) => {
                match self.comments.delete(&mut self.store, index) {
                    // Logged by the store; a stale index is not a user-facing failure.
                    Ok(()) | Err(ProjectStoreError::CommentIndexOutOfRange { .. }) => {}
                    Err(err) => self.report_failure(
                        NotificationLevel::Error,
                        "Failed to delete comment",
                        &err,
                    ),
                }
            }
            ShellCommand::UseTool(tool) => self.use_tool(tool),
            ShellCommand::ToggleTheme => self.toggle_theme(),
            ShellCommand::DismissNotification(id) => {
                self.notifications.dismiss(id);
            }
        }
    }

    /// Pull-based view model of the current state.
    pub fn snapshot(&self) -> ShellSnapshot {
        let mode = self.mode.mode();
        let board = self.store.titles();
        let titles = TitleField::ALL
            .into_iter()
            .map(|field| {
                let slot = board.slot(field);
                TitleView {
                    field,
                    text: slot.text().to_string(),
                    editable: mode.allows_title_edit(field),
                    editing: slot.is_editing(),
                    focused: board.focused().map(EditableTitle::field) == Some(field),
                }
            })
            .collect();

        ShellSnapshot {
            mode,
            controls: controls_for(mode),
            titles,
            comments: self.comments.render(&self.store),
            comment_draft: self.comments.draft().to_string(),
            notifications: self.notifications.active().cloned().collect(),
            theme: self.theme,
        }
    }

    fn title_editor(&mut self) -> TitleEditor<'_, S> {
        TitleEditor::new(self.mode.mode(), &mut self.store)
    }

    fn save(&mut self) {
        match self.store.save() {
            Ok(_) => {
                self.mode.exit_creation(&mut self.store);
                self.notifications
                    .push(NotificationLevel::Success, "Project saved successfully!");
            }
            Err(err) => {
                self.report_failure(NotificationLevel::Error, "Failed to save project", &err)
            }
        }
    }

    fn load(&mut self) {
        match self.store.load() {
            Ok(_) => {
                self.notifications
                    .push(NotificationLevel::Success, "Project loaded successfully!");
            }
            Err(ProjectStoreError::NothingToLoad) => {
                self.notifications
                    .push(NotificationLevel::Info, "No saved project found.");
            }
            Err(err) if err.is_corrupted_data() => {
                self.report_failure(
                    NotificationLevel::Error,
                    "Saved project data is corrupted",
                    &err,
                );
            }
            Err(err) => {
                self.report_failure(NotificationLevel::Error, "Could not read saved project", &err)
            }
        }
    }

    fn use_tool(&mut self, tool: ToolAction) {
        if !self.mode.mode().is_creation() {
            debug!(
                "event=use_tool module=shell status=ignored tool={} mode=initial",
                tool.name()
            );
            return;
        }
        self.notifications.push(
            NotificationLevel::Info,
            format!(
                "{} tool - functionality to be added later",
                tool.tooltip()
            ),
        );
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(err) = store_theme(self.store.storage(), &self.config.theme_key, self.theme) {
            warn!("event=theme_store module=shell status=error error={err}");
            self.notifications.push(
                NotificationLevel::Warning,
                format!("Theme preference could not be saved: {err}"),
            );
        }
    }

    fn report_failure(&mut self, level: NotificationLevel, context: &str, err: &ProjectStoreError) {
        self.notifications.push(level, format!("{context}: {err}"));
    }
}
