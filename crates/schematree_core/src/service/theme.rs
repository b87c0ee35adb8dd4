//! Theme preference persisted next to the project document.

use crate::repo::kv_repo::{KeyValueStore, KvResult};
use log::warn;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads the stored theme. Missing, unknown or unreadable values yield the
/// default theme.
pub fn load_theme<S: KeyValueStore>(storage: &S, key: &str) -> Theme {
    match storage.get(key) {
        Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
            warn!("event=theme_load module=theme status=ignored reason=unknown_value");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(err) => {
            warn!("event=theme_load module=theme status=error error={err}");
            Theme::default()
        }
    }
}

pub fn store_theme<S: KeyValueStore>(storage: &S, key: &str, theme: Theme) -> KvResult<()> {
    storage.set(key, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::{load_theme, store_theme, Theme};
    use crate::repo::kv_repo::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn unknown_stored_value_falls_back_to_light() {
        let storage = MemoryKeyValueStore::new();
        storage.set("theme", "sepia").unwrap();
        assert_eq!(load_theme(&storage, "theme"), Theme::Light);
    }

    #[test]
    fn stored_theme_round_trips() {
        let storage = MemoryKeyValueStore::new();
        store_theme(&storage, "theme", Theme::Dark).unwrap();
        assert_eq!(load_theme(&storage, "theme"), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
