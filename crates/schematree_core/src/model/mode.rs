//! Shell mode and title field identities.

use std::fmt::{Display, Formatter};

/// Process-wide editing mode of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Read-only default state.
    #[default]
    Initial,
    /// Editable state; tree and notes titles accept edits.
    Creation,
}

impl Mode {
    pub fn is_creation(self) -> bool {
        matches!(self, Self::Creation)
    }

    /// Returns whether `field` may be edited by the user in this mode.
    pub fn allows_title_edit(self, field: TitleField) -> bool {
        self.is_creation() && field.editable().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Creation => "creation",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three section titles carried by a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TitleField {
    Tree,
    Notes,
    Discussion,
}

impl TitleField {
    pub const ALL: [TitleField; 3] = [Self::Tree, Self::Notes, Self::Discussion];

    /// Narrows to the user-editable subset.
    pub fn editable(self) -> Option<EditableTitle> {
        match self {
            Self::Tree => Some(EditableTitle::Tree),
            Self::Notes => Some(EditableTitle::Notes),
            Self::Discussion => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Notes => "notes",
            Self::Discussion => "discussion",
        }
    }
}

impl Display for TitleField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title fields the user can edit directly.
///
/// The discussion title is only ever captured at save time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableTitle {
    Tree,
    Notes,
}

impl EditableTitle {
    pub const ALL: [EditableTitle; 2] = [Self::Tree, Self::Notes];

    pub fn field(self) -> TitleField {
        match self {
            Self::Tree => TitleField::Tree,
            Self::Notes => TitleField::Notes,
        }
    }

    /// Parses the lowercase field name used by text front-ends.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Some(Self::Tree),
            "notes" => Some(Self::Notes),
            _ => None,
        }
    }
}

impl From<EditableTitle> for TitleField {
    fn from(value: EditableTitle) -> Self {
        value.field()
    }
}

impl Display for EditableTitle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.field(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::{EditableTitle, Mode, TitleField};

    #[test]
    fn only_tree_and_notes_are_editable_in_creation() {
        assert!(Mode::Creation.allows_title_edit(TitleField::Tree));
        assert!(Mode::Creation.allows_title_edit(TitleField::Notes));
        assert!(!Mode::Creation.allows_title_edit(TitleField::Discussion));
        for field in TitleField::ALL {
            assert!(!Mode::Initial.allows_title_edit(field));
        }
    }

    #[test]
    fn editable_title_parse_is_case_insensitive() {
        assert_eq!(EditableTitle::parse(" Tree "), Some(EditableTitle::Tree));
        assert_eq!(EditableTitle::parse("NOTES"), Some(EditableTitle::Notes));
        assert_eq!(EditableTitle::parse("discussion"), None);
    }
}
