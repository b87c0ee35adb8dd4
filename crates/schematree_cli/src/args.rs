//! Command-line arguments.

use clap::Parser;
use schematree_core::{DEFAULT_PROJECT_KEY, DEFAULT_THEME_KEY};
use std::path::{Path, PathBuf};

/// Interactive shell for a SchemaTree project.
///
/// Reads one command per line from stdin and prints the resulting view.
#[derive(Parser, Debug)]
#[command(name = "schematree", version, about, long_about = None)]
pub struct Cli {
    /// SQLite file holding the saved project.
    #[arg(long, env = "SCHEMATREE_DB", default_value = "schematree.sqlite3")]
    pub db: PathBuf,

    /// Keep everything in memory; nothing survives the session. Wins over `--db`.
    #[arg(long)]
    pub in_memory: bool,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "SCHEMATREE_LOG_DIR")]
    pub log_dir: Option<String>,

    /// trace|debug|info|warn|error. Defaults to debug in debug builds, info otherwise.
    #[arg(long, env = "SCHEMATREE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Storage key for the project document.
    #[arg(long, env = "SCHEMATREE_PROJECT_KEY", default_value = DEFAULT_PROJECT_KEY)]
    pub project_key: String,

    /// Storage key for the theme preference.
    #[arg(long, env = "SCHEMATREE_THEME_KEY", default_value = DEFAULT_THEME_KEY)]
    pub theme_key: String,
}

/// Where the shell keeps its key-value data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageTarget<'a> {
    Memory,
    File(&'a Path),
}

impl Cli {
    pub fn storage_target(&self) -> StorageTarget<'_> {
        if self.in_memory {
            StorageTarget::Memory
        } else {
            StorageTarget::File(&self.db)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, StorageTarget};
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn db_path_is_used_by_default() {
        let cli = Cli::try_parse_from(["schematree", "--db", "work.sqlite3"])
            .expect("flags should parse");
        assert_eq!(
            cli.storage_target(),
            StorageTarget::File(Path::new("work.sqlite3"))
        );
    }

    #[test]
    fn in_memory_wins_over_an_explicit_db() {
        let cli = Cli::try_parse_from(["schematree", "--db", "work.sqlite3", "--in-memory"])
            .expect("--in-memory must combine with --db");
        assert_eq!(cli.storage_target(), StorageTarget::Memory);
    }
}
