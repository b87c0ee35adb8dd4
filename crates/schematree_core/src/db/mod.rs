//! SQLite bootstrap for the key-value storage backend.
//!
//! # Responsibility
//! - Open the database that backs `SqliteKeyValueStore`.
//! - Bring its `kv_entries` schema up to date before any key is touched.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - Every failure names the bootstrap step that produced it.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Failure while preparing the storage database.
#[derive(Debug)]
pub enum BootstrapError {
    /// The database file (or in-memory handle) could not be opened.
    Connect(rusqlite::Error),
    /// Connection settings such as the busy timeout were refused.
    Configure(rusqlite::Error),
    /// `PRAGMA user_version` could not be read.
    ReadVersion(rusqlite::Error),
    /// Migration `version` failed; the whole batch was rolled back.
    Migrate {
        version: u32,
        source: rusqlite::Error,
    },
    /// The file was written by a build with newer migrations.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for BootstrapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect(err) => write!(f, "cannot open storage database: {err}"),
            Self::Configure(err) => write!(f, "cannot configure storage connection: {err}"),
            Self::ReadVersion(err) => write!(f, "cannot read storage schema version: {err}"),
            Self::Migrate { version, source } => {
                write!(f, "storage migration {version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "storage schema version {found} comes from a newer build; this build supports up to {supported}"
            ),
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connect(err) | Self::Configure(err) | Self::ReadVersion(err) => Some(err),
            Self::Migrate { source, .. } => Some(source),
            Self::SchemaTooNew { .. } => None,
        }
    }
}
