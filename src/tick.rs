//! Background tick loops that keep the window's labels fresh.
//!
//! Two detached tasks on the shared async runtime: a 100 ms loop that emits
//! the formatted elapsed time while the stopwatch runs, and a 1 s loop that
//! emits the current local time for the wall-clock label. Both are pure
//! emitters; they read session state briefly and never hold the lock across
//! an await.

use std::time::Duration;

use chrono::Local;
use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager};

use crate::stopwatch::{format, SharedSession};

/// Elapsed-label refresh cadence.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Wall-clock label refresh cadence.
pub const WALL_CLOCK_INTERVAL: Duration = Duration::from_secs(1);

/// Event carrying the elapsed label while the stopwatch runs.
pub const STOPWATCH_TICK_EVENT: &str = "stopwatch-tick";

/// Event carrying the current local time, independent of stopwatch state.
pub const WALL_CLOCK_TICK_EVENT: &str = "wall-clock-tick";

/// Payload of [`STOPWATCH_TICK_EVENT`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickPayload {
    pub label: String,
    pub elapsed_ms: u64,
}

/// Spawn both tick loops. Called once from the app setup hook, after the
/// session state has been managed.
pub fn spawn(app: &AppHandle) {
    spawn_stopwatch_tick(app.clone());
    spawn_wall_clock_tick(app.clone());
}

fn spawn_stopwatch_tick(app: AppHandle) {
    tauri::async_runtime::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;

            let state = app.state::<SharedSession>();
            // Skip the beat on a poisoned lock; emit only while running
            let payload = match state.lock() {
                Ok(session) if session.is_running() => {
                    let elapsed_ms = session.elapsed_ms();
                    Some(TickPayload {
                        label: format::format_hms(elapsed_ms),
                        elapsed_ms,
                    })
                },
                _ => None,
            };

            if let Some(payload) = payload {
                let _ = app.emit(STOPWATCH_TICK_EVENT, payload);
            }
        }
    });
}

fn spawn_wall_clock_tick(app: AppHandle) {
    tauri::async_runtime::spawn(async move {
        let mut interval = tokio::time::interval(WALL_CLOCK_INTERVAL);
        loop {
            interval.tick().await;
            let _ = app.emit(WALL_CLOCK_TICK_EVENT, format::format_wall_clock(Local::now()));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_payload_serializes_camel_case() {
        let payload = TickPayload {
            label: "00:01:01".to_string(),
            elapsed_ms: 61_234,
        };
        let json = serde_json::to_string(&payload).expect("serialize");
        assert!(json.contains("\"elapsedMs\":61234"));
        assert!(json.contains("\"label\":\"00:01:01\""));
    }

    #[test]
    fn test_cadences() {
        assert_eq!(TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(WALL_CLOCK_INTERVAL, Duration::from_secs(1));
    }
}
