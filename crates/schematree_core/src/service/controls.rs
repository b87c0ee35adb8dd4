//! Mode-dependent control set.
//!
//! The view rebuilds its buttons and tool panels from `controls_for(mode)`
//! after every dispatch instead of rebinding handlers by hand.

use crate::model::mode::Mode;
use crate::service::shell::ShellCommand;

/// Placeholder tools offered while in creation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolAction {
    AddNode,
    RemoveNode,
    DrawLines,
    Undo,
    Redo,
    AddText,
    AttachFiles,
    AddForms,
}

impl ToolAction {
    pub const TREE: &'static [ToolAction] = &[
        Self::AddNode,
        Self::RemoveNode,
        Self::DrawLines,
        Self::Undo,
        Self::Redo,
    ];
    pub const NOTES: &'static [ToolAction] = &[Self::AddText, Self::AttachFiles, Self::AddForms];

    /// Short name used by text front-ends.
    pub fn name(self) -> &'static str {
        match self {
            Self::AddNode => "add-node",
            Self::RemoveNode => "remove-node",
            Self::DrawLines => "draw-lines",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::AddText => "add-text",
            Self::AttachFiles => "attach-files",
            Self::AddForms => "add-forms",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            Self::AddNode => "Add a node",
            Self::RemoveNode => "Remove a node",
            Self::DrawLines => "Draw or edit lines",
            Self::Undo => "Undo last change",
            Self::Redo => "Redo last change",
            Self::AddText => "Add text",
            Self::AttachFiles => "Attach files",
            Self::AddForms => "Add forms",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::TREE
            .iter()
            .chain(Self::NOTES)
            .copied()
            .find(|tool| tool.name() == value)
    }
}

/// One button: its label and the command it dispatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub command: ShellCommand,
}

/// Tool lists shown next to the tree and notes titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolPanels {
    pub tree: &'static [ToolAction],
    pub notes: &'static [ToolAction],
}

/// Everything the view needs to draw mode-dependent affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSet {
    pub primary: Control,
    pub secondary: Control,
    /// `None` while the panels are hidden.
    pub tool_panels: Option<ToolPanels>,
    /// Mirrors the page-level "creation-mode" flag.
    pub creation_flag: bool,
}

/// Pure mapping from mode to controls.
pub fn controls_for(mode: Mode) -> ControlSet {
    match mode {
        Mode::Initial => ControlSet {
            primary: Control {
                label: "Create",
                command: ShellCommand::EnterCreation,
            },
            secondary: Control {
                label: "Open",
                command: ShellCommand::Load,
            },
            tool_panels: None,
            creation_flag: false,
        },
        Mode::Creation => ControlSet {
            primary: Control {
                label: "Save",
                command: ShellCommand::Save,
            },
            secondary: Control {
                label: "Exit",
                command: ShellCommand::ExitCreation,
            },
            tool_panels: Some(ToolPanels {
                tree: ToolAction::TREE,
                notes: ToolAction::NOTES,
            }),
            creation_flag: true,
        },
    }
}
