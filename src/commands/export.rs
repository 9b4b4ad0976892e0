//! Lap export: write the visible ledger rows to a plain-text file.
//!
//! Path selection happens in the frontend via the dialog plugin's save
//! dialog; a cancelled dialog never reaches this module. Write failures are
//! surfaced as a typed error rather than swallowed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tauri::State;

use crate::app_log;
use crate::commands::logging::LogLevel;
use crate::error::{LockResultExt, WatchError, WatchResult};
use crate::stopwatch::SharedSession;

/// Write rows as one newline-terminated line each, overwriting `path`.
///
/// An empty row set produces an empty file.
pub(crate) fn write_rows(path: &Path, rows: &[String]) -> io::Result<()> {
    let mut contents = String::new();
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(path, contents)
}

/// Export the current ledger rows to `path` and return the line count.
#[tauri::command]
pub fn export_laps(state: State<'_, SharedSession>, path: String) -> WatchResult<usize> {
    let rows = {
        let session = state.lock().map_lock_err("session")?;
        session.ledger().rows()
    };

    let dest = PathBuf::from(path);
    write_rows(&dest, &rows).map_err(|source| {
        log::error!("[EXPORT] writing {} failed: {}", dest.display(), source);
        WatchError::Export { path: dest.clone(), source }
    })?;

    app_log!(
        LogLevel::Info,
        "Export",
        "wrote {} laps to {}",
        rows.len(),
        dest.display()
    );
    Ok(rows.len())
}
