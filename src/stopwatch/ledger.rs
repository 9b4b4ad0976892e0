//! The lap ledger: an ordered, capacity-checked log of recorded laps.

use chrono::{DateTime, Local};
use serde::Serialize;

use super::format::{format_lap, format_wall_clock};

/// Default ledger capacity.
///
/// Large enough that nobody hits it by hand; the cap exists so a stopwatch
/// left running with an auto-clicker cannot grow without bound.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// One recorded lap: the wall-clock moment of the stop and the elapsed
/// duration the stopwatch showed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LapRecord {
    pub recorded_at: DateTime<Local>,
    pub elapsed_ms: u64,
}

impl LapRecord {
    pub fn new(elapsed_ms: u64) -> Self {
        Self {
            recorded_at: Local::now(),
            elapsed_ms,
        }
    }

    /// The display row for this lap, also the export line.
    pub fn row(&self) -> String {
        format!(
            "{} {}",
            format_wall_clock(self.recorded_at),
            format_lap(self.elapsed_ms)
        )
    }
}

/// Ordered sequence of recorded laps with an explicit capacity check.
///
/// Insertion order is display order. The only removal is a full clear.
#[derive(Debug, Clone)]
pub struct LapLedger {
    laps: Vec<LapRecord>,
    capacity: usize,
}

impl Default for LapLedger {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl LapLedger {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            laps: Vec::new(),
            capacity,
        }
    }

    /// Append a lap. Returns `false` when the ledger is at capacity and the
    /// lap was refused.
    pub fn record(&mut self, lap: LapRecord) -> bool {
        if self.is_full() {
            return false;
        }
        self.laps.push(lap);
        true
    }

    pub fn clear(&mut self) {
        self.laps.clear();
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.laps.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn laps(&self) -> &[LapRecord] {
        &self.laps
    }

    /// Display rows in insertion order. This is exactly what export writes.
    pub fn rows(&self) -> Vec<String> {
        self.laps.iter().map(LapRecord::row).collect()
    }
}
