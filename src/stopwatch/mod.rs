//! The stopwatch domain: elapsed clock, lap ledger, and the session that
//! ties them together behind the IPC surface.
//!
//! ```text
//! mod.rs (StopwatchSession + snapshots)
//!   |
//!   +-- clock.rs  (ElapsedClock state machine)
//!   +-- ledger.rs (LapLedger, LapRecord)
//!   +-- format.rs (label/row/wall-clock formatting)
//! ```

pub mod clock;
pub mod format;
pub mod ledger;

use std::sync::Mutex;

use serde::Serialize;

use crate::error::{WatchError, WatchResult};
use clock::ElapsedClock;
use ledger::{LapLedger, LapRecord};

/// The managed session type registered with Tauri.
pub type SharedSession = Mutex<StopwatchSession>;

/// Serialized view of the session, returned by every session command and
/// used by the frontend to render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub running: bool,
    pub elapsed_ms: u64,
    pub label: String,
    pub rows: Vec<String>,
    pub last_lap: Option<LapRecord>,
}

/// The stopwatch state: one clock, one ledger.
///
/// Owned by Tauri's managed state behind a mutex; commands and the tick
/// loop are the only readers and writers.
#[derive(Debug, Default)]
pub struct StopwatchSession {
    clock: ElapsedClock,
    ledger: LapLedger,
}

impl StopwatchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start or resume the clock. Returns `false` when already running.
    pub fn start(&mut self) -> bool {
        self.clock.start()
    }

    /// Halt the clock and record the sampled elapsed time as a lap.
    ///
    /// Returns `Ok(None)` when the clock was not running (guarded no-op),
    /// `Err(LedgerFull)` when the ledger refused the lap. The clock halts
    /// either way; ledger occupancy does not keep the clock running.
    pub fn stop(&mut self) -> WatchResult<Option<LapRecord>> {
        let Some(elapsed) = self.clock.halt() else {
            return Ok(None);
        };
        let lap = LapRecord::new(elapsed.as_millis() as u64);
        if !self.ledger.record(lap.clone()) {
            return Err(WatchError::LedgerFull {
                capacity: self.ledger.capacity(),
            });
        }
        Ok(Some(lap))
    }

    /// Zero the clock and clear the ledger.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.ledger.clear();
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.clock.elapsed_ms()
    }

    pub fn ledger(&self) -> &LapLedger {
        &self.ledger
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let elapsed_ms = self.elapsed_ms();
        SessionSnapshot {
            running: self.is_running(),
            elapsed_ms,
            label: format::format_hms(elapsed_ms),
            rows: self.ledger.rows(),
            last_lap: self.ledger.laps().last().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_start_stop_records_one_lap() {
        let mut session = StopwatchSession::new();
        assert!(session.start());
        std::thread::sleep(Duration::from_millis(50));

        let lap = session.stop().expect("ledger has room").expect("was running");
        assert_eq!(session.ledger().len(), 1);
        // Within one tick interval of the simulated duration
        assert!(lap.elapsed_ms >= 50 && lap.elapsed_ms < 150, "lap: {}", lap.elapsed_ms);
        assert!(!session.is_running());
    }

    #[test]
    fn test_stop_while_idle_records_nothing() {
        let mut session = StopwatchSession::new();
        assert!(session.stop().expect("no error").is_none());
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = StopwatchSession::new();
        session.start();
        std::thread::sleep(Duration::from_millis(10));
        session.stop().unwrap();
        session.start();
        session.reset();

        assert!(!session.is_running());
        assert_eq!(session.elapsed_ms(), 0);
        assert!(session.ledger().is_empty());
        assert_eq!(session.snapshot().label, "00:00:00");
    }

    #[test]
    fn test_stop_at_capacity_surfaces_ledger_full_and_halts() {
        let mut session = StopwatchSession {
            clock: ElapsedClock::default(),
            ledger: LapLedger::with_capacity(1),
        };

        session.start();
        session.stop().expect("first lap fits");
        assert_eq!(session.ledger().len(), 1);

        session.start();
        let err = session.stop().expect_err("ledger is full");
        assert!(matches!(err, WatchError::LedgerFull { capacity: 1 }));

        // The clock halted even though the lap was refused
        assert!(!session.is_running());
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut session = StopwatchSession::new();
        let snap = session.snapshot();
        assert!(!snap.running);
        assert_eq!(snap.label, "00:00:00");
        assert!(snap.rows.is_empty());
        assert!(snap.last_lap.is_none());

        session.start();
        std::thread::sleep(Duration::from_millis(10));
        session.stop().unwrap();

        let snap = session.snapshot();
        assert_eq!(snap.rows.len(), 1);
        let last = snap.last_lap.expect("one lap recorded");
        assert_eq!(last.row(), snap.rows[0]);
    }
}
