//! Shell configuration.
//!
//! # Responsibility
//! - Name the storage keys the shell persists under.
//! - Carry the default title labels recorded before any edit.

use crate::model::project::normalize_title;

/// Storage key of the serialized project document.
pub const DEFAULT_PROJECT_KEY: &str = "schemaTreeProject";
/// Storage key of the theme preference string.
pub const DEFAULT_THEME_KEY: &str = "schemaTreeTheme";

/// Labels shown in each title slot at start-up.
///
/// These double as the fallback a blank title edit collapses to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleLabels {
    pub tree: String,
    pub notes: String,
    pub discussion: String,
}

impl TitleLabels {
    /// Returns a copy where every blank label is replaced with `Untitled`.
    pub fn normalized(&self) -> Self {
        Self {
            tree: normalize_title(&self.tree, ""),
            notes: normalize_title(&self.notes, ""),
            discussion: normalize_title(&self.discussion, ""),
        }
    }
}

impl Default for TitleLabels {
    fn default() -> Self {
        Self {
            tree: "Tree".to_string(),
            notes: "Notes".to_string(),
            discussion: "Discussion".to_string(),
        }
    }
}

/// Shell-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub project_key: String,
    pub theme_key: String,
    pub labels: TitleLabels,
}

impl ShellConfig {
    /// Checks that both storage keys are usable and distinct.
    pub fn validate(&self) -> Result<(), String> {
        if self.project_key.trim().is_empty() {
            return Err("project_key cannot be empty".to_string());
        }
        if self.theme_key.trim().is_empty() {
            return Err("theme_key cannot be empty".to_string());
        }
        if self.project_key == self.theme_key {
            return Err(format!(
                "project_key and theme_key must differ, both are `{}`",
                self.project_key
            ));
        }
        Ok(())
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            project_key: DEFAULT_PROJECT_KEY.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
            labels: TitleLabels::default(),
        }
    }
}
