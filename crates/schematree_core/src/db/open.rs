//! Connection bootstrap for the SQLite storage backend.
//!
//! # Invariants
//! - Returned connections have a busy timeout.
//! - Returned connections have every migration applied.

use super::migrations::apply_migrations;
use super::{BootstrapError, BootstrapResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) the storage file at `path` and migrates it.
///
/// # Side effects
/// - Emits `db_open` events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> BootstrapResult<Connection> {
    open_with("file", || Connection::open(path))
}

/// Opens a throwaway in-memory store and migrates it.
pub fn open_db_in_memory() -> BootstrapResult<Connection> {
    open_with("memory", Connection::open_in_memory)
}

fn open_with(
    mode: &'static str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> BootstrapResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode={mode}");

    let result = connect()
        .map_err(BootstrapError::Connect)
        .and_then(|mut conn| prepare(&mut conn).map(|()| conn));

    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
    result
}

fn prepare(conn: &mut Connection) -> BootstrapResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)
        .map_err(BootstrapError::Configure)?;
    apply_migrations(conn)
}
