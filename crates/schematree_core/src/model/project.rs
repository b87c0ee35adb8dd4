//! Project document model.
//!
//! # Responsibility
//! - Define the persisted unit (`ProjectDocument`) and its `Comment` records.
//! - Own comment text validation and title normalization rules.
//!
//! # Invariants
//! - Comments created in this session are trimmed, hold
//!   1..=`MAX_COMMENT_CHARS` characters and carry an RFC 3339 timestamp.
//! - Stored comments are accepted as found; only titles gate a load.
//! - `nodes` is opaque and passed through save/load untouched.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use super::mode::TitleField;

/// Upper bound for trimmed comment text, counted in characters.
pub const MAX_COMMENT_CHARS: usize = 500;

/// Label used when a field's recorded default label is itself blank.
pub const UNTITLED_LABEL: &str = "Untitled";

/// Validation errors for comment input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentValidationError {
    /// Text is empty after trimming.
    Empty,
    /// Text exceeds `MAX_COMMENT_CHARS` after trimming.
    TooLong { chars: usize, max: usize },
    /// Text carries leading or trailing whitespace.
    Untrimmed,
    /// Timestamp is not RFC 3339.
    InvalidTimestamp(String),
}

impl Display for CommentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "comment must not be empty"),
            Self::TooLong { chars, max } => {
                write!(f, "comment is {chars} characters long; the limit is {max}")
            }
            Self::Untrimmed => write!(f, "comment text has surrounding whitespace"),
            Self::InvalidTimestamp(value) => write!(f, "invalid comment timestamp `{value}`"),
        }
    }
}

impl Error for CommentValidationError {}

/// Reasons a decoded document is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentValidationError {
    BlankTitle(TitleField),
}

impl Display for DocumentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle(field) => write!(f, "{field} title is blank"),
        }
    }
}

impl Error for DocumentValidationError {}

/// One discussion comment.
///
/// Created once, removed by position, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    /// RFC 3339 UTC with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`.
    pub timestamp: String,
}

impl Comment {
    /// Creates a comment stamped with the current time.
    pub fn new(text: &str) -> Result<Self, CommentValidationError> {
        Self::at(text, Utc::now())
    }

    /// Creates a comment stamped with `created_at`.
    ///
    /// # Errors
    /// - `Empty` when `text` trims to nothing.
    /// - `TooLong` when the trimmed text exceeds `MAX_COMMENT_CHARS`.
    pub fn at(text: &str, created_at: DateTime<Utc>) -> Result<Self, CommentValidationError> {
        let text = normalize_comment_text(text)?;
        Ok(Self {
            text,
            timestamp: format_timestamp(created_at),
        })
    }

    /// Parses the stored timestamp.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|value| value.with_timezone(&Utc))
    }

    /// Checks a hand-built comment against the rules `Comment::at` enforces.
    pub fn check(&self) -> Result<(), CommentValidationError> {
        if normalize_comment_text(&self.text)? != self.text {
            return Err(CommentValidationError::Untrimmed);
        }
        if self.created_at().is_none() {
            return Err(CommentValidationError::InvalidTimestamp(
                self.timestamp.clone(),
            ));
        }
        Ok(())
    }
}

/// The persisted project unit.
///
/// Serialized with camelCase keys: `treeTitle`, `notesTitle`,
/// `discussionTitle`, `comments`, `nodes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub tree_title: String,
    pub notes_title: String,
    pub discussion_title: String,
    /// Display order equals insertion order.
    pub comments: Vec<Comment>,
    /// Reserved node records. Nothing reads or writes these yet.
    #[serde(default)]
    pub nodes: Vec<serde_json::Value>,
}

impl ProjectDocument {
    pub fn with_titles(
        tree_title: impl Into<String>,
        notes_title: impl Into<String>,
        discussion_title: impl Into<String>,
    ) -> Self {
        Self {
            tree_title: tree_title.into(),
            notes_title: notes_title.into(),
            discussion_title: discussion_title.into(),
            comments: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn title(&self, field: TitleField) -> &str {
        match field {
            TitleField::Tree => &self.tree_title,
            TitleField::Notes => &self.notes_title,
            TitleField::Discussion => &self.discussion_title,
        }
    }

    pub fn set_title(&mut self, field: TitleField, value: impl Into<String>) {
        let slot = match field {
            TitleField::Tree => &mut self.tree_title,
            TitleField::Notes => &mut self.notes_title,
            TitleField::Discussion => &mut self.discussion_title,
        };
        *slot = value.into();
    }

    /// Checks what a decoded document must satisfy before it may replace
    /// the in-memory one. Comments are not re-validated.
    pub fn validate(&self) -> Result<(), DocumentValidationError> {
        match TitleField::ALL
            .into_iter()
            .find(|field| self.title(*field).trim().is_empty())
        {
            Some(field) => Err(DocumentValidationError::BlankTitle(field)),
            None => Ok(()),
        }
    }
}

impl Default for ProjectDocument {
    fn default() -> Self {
        Self::with_titles("Tree", "Notes", "Discussion")
    }
}

/// Trims a title; blank input falls back to `default_label`, and a blank
/// default falls back to `UNTITLED_LABEL`.
pub fn normalize_title(raw: &str, default_label: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    let fallback = default_label.trim();
    if fallback.is_empty() {
        UNTITLED_LABEL.to_string()
    } else {
        fallback.to_string()
    }
}

/// Trims comment text and enforces its length bounds.
pub fn normalize_comment_text(raw: &str) -> Result<String, CommentValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CommentValidationError::Empty);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_COMMENT_CHARS {
        return Err(CommentValidationError::TooLong {
            chars,
            max: MAX_COMMENT_CHARS,
        });
    }
    Ok(trimmed.to_string())
}

/// Formats `value` the way comment timestamps are stored.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::{
        normalize_comment_text, normalize_title, Comment, CommentValidationError,
        ProjectDocument, MAX_COMMENT_CHARS,
    };

    #[test]
    fn normalize_title_trims_and_falls_back() {
        assert_eq!(normalize_title("  Roots  ", "Tree"), "Roots");
        assert_eq!(normalize_title(" \t ", "Tree"), "Tree");
        assert_eq!(normalize_title("", "  "), "Untitled");
    }

    #[test]
    fn comment_text_bounds_count_characters() {
        let at_limit = "é".repeat(MAX_COMMENT_CHARS);
        assert_eq!(
            normalize_comment_text(&at_limit).expect("500 chars should pass"),
            at_limit
        );

        let over = "x".repeat(MAX_COMMENT_CHARS + 1);
        assert_eq!(
            normalize_comment_text(&over).expect_err("501 chars must fail"),
            CommentValidationError::TooLong {
                chars: MAX_COMMENT_CHARS + 1,
                max: MAX_COMMENT_CHARS
            }
        );
    }

    #[test]
    fn check_flags_hand_built_comments() {
        let padded = Comment {
            text: "  padded ".to_string(),
            timestamp: "2024-01-01T00:00:00.000Z".to_string(),
        };
        assert_eq!(padded.check(), Err(CommentValidationError::Untrimmed));

        let odd_time = Comment {
            text: "fine".to_string(),
            timestamp: "Mon Jan 01 2024".to_string(),
        };
        assert_eq!(
            odd_time.check(),
            Err(CommentValidationError::InvalidTimestamp(
                "Mon Jan 01 2024".to_string()
            ))
        );
    }

    #[test]
    fn validate_ignores_comment_contents() {
        let mut document = ProjectDocument::default();
        document.comments.push(Comment {
            text: "x".repeat(MAX_COMMENT_CHARS + 1),
            timestamp: "Mon Jan 01 2024".to_string(),
        });
        assert_eq!(document.validate(), Ok(()));

        document.notes_title = " ".to_string();
        assert!(document.validate().is_err());
    }
}
