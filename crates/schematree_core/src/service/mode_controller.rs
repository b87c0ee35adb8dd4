//! Initial/creation mode state machine.
//!
//! # Responsibility
//! - Own the shell `Mode`.
//! - Run the enter/exit transitions and their title side effects.
//!
//! # Invariants
//! - Only `Initial -> Creation` and `Creation -> Initial` exist.
//! - Repeating a transition from its target state is a no-op.
//! - Leaving creation mode commits tree and notes titles first.

use crate::model::mode::{EditableTitle, Mode};
use crate::repo::kv_repo::KeyValueStore;
use crate::service::project_store::ProjectStore;
use crate::service::title_editor::TitleEditor;
use log::info;

/// Result of a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed { from: Mode, to: Mode },
    Unchanged(Mode),
}

impl Transition {
    pub fn changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Owner of the shell mode.
#[derive(Debug, Default)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// `Initial -> Creation`. Tree and notes titles become editable and the
    /// tool panels are shown through the mode-derived control set.
    pub fn enter_creation(&mut self) -> Transition {
        if self.mode.is_creation() {
            return Transition::Unchanged(self.mode);
        }
        self.mode = Mode::Creation;
        info!("event=mode_change module=mode status=ok from=initial to=creation");
        Transition::Changed {
            from: Mode::Initial,
            to: Mode::Creation,
        }
    }

    /// `Creation -> Initial`. Force-confirms tree and notes titles while they
    /// are still editable, then switches mode.
    pub fn exit_creation<S: KeyValueStore>(&mut self, store: &mut ProjectStore<S>) -> Transition {
        if !self.mode.is_creation() {
            return Transition::Unchanged(self.mode);
        }

        let mut editor = TitleEditor::new(self.mode, store);
        for field in EditableTitle::ALL {
            editor.confirm_edit(field);
        }

        self.mode = Mode::Initial;
        info!("event=mode_change module=mode status=ok from=creation to=initial");
        Transition::Changed {
            from: Mode::Creation,
            to: Mode::Initial,
        }
    }
}
