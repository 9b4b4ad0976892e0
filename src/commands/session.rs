//! Session commands: the Start/Stop/Reset buttons and frontend init.
//!
//! Every command returns a full `SessionSnapshot` so the frontend never has
//! to derive state locally.

use tauri::State;

use crate::error::{LockResultExt, WatchResult};
use crate::stopwatch::{SessionSnapshot, SharedSession};

/// Start or resume the stopwatch. Starting a running stopwatch is a no-op.
#[tauri::command]
pub fn start_stopwatch(state: State<'_, SharedSession>) -> WatchResult<SessionSnapshot> {
    let mut session = state.lock().map_lock_err("session")?;
    if !session.start() {
        log::debug!("[SESSION] start ignored, clock already running");
    }
    Ok(session.snapshot())
}

/// Halt the stopwatch and record the sampled elapsed time as a lap.
///
/// Surfaces `LedgerFull` when the ledger refuses the lap; the clock halts
/// regardless, so the frontend should re-query state on error.
#[tauri::command]
pub fn stop_stopwatch(state: State<'_, SharedSession>) -> WatchResult<SessionSnapshot> {
    let mut session = state.lock().map_lock_err("session")?;
    session.stop()?;
    Ok(session.snapshot())
}

/// Zero the clock, clear the ledger, freeze the label at `00:00:00`.
#[tauri::command]
pub fn reset_stopwatch(state: State<'_, SharedSession>) -> WatchResult<SessionSnapshot> {
    let mut session = state.lock().map_lock_err("session")?;
    session.reset();
    Ok(session.snapshot())
}

/// Read-only snapshot for frontend initialization and error recovery.
#[tauri::command]
pub fn get_session_state(state: State<'_, SharedSession>) -> WatchResult<SessionSnapshot> {
    let session = state.lock().map_lock_err("session")?;
    Ok(session.snapshot())
}
