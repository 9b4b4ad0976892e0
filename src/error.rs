//! Central error types for Lapwatch.
//!
//! All errors implement `Serialize` for Tauri IPC compatibility, so command
//! failures arrive in the webview as their display strings.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Main error type for Lapwatch operations.
#[derive(Error, Debug)]
pub enum WatchError {
    /// Writing the lap export file failed
    #[error("Export to {path} failed: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The lap ledger is at capacity; the stop was not recorded
    #[error("Lap ledger is full ({capacity} laps)")]
    LedgerFull { capacity: usize },

    /// Lock poisoned (mutex)
    #[error("Lock poisoned: {context}")]
    LockPoisoned { context: String },
}

/// Implement Serialize for Tauri IPC compatibility.
/// Tauri requires errors to be serializable to send to the frontend.
impl Serialize for WatchError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as the error message string
        serializer.serialize_str(&self.to_string())
    }
}

/// Helper trait for converting mutex lock errors to WatchError.
pub trait LockResultExt<T> {
    /// Convert a poisoned lock error to WatchError with context.
    fn map_lock_err(self, context: &str) -> Result<T, WatchError>;
}

impl<T> LockResultExt<T> for Result<T, std::sync::PoisonError<T>> {
    fn map_lock_err(self, context: &str) -> Result<T, WatchError> {
        self.map_err(|_| WatchError::LockPoisoned {
            context: context.to_string(),
        })
    }
}

/// Type alias for Results using WatchError.
pub type WatchResult<T> = Result<T, WatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WatchError::LedgerFull { capacity: 15 };
        assert_eq!(err.to_string(), "Lap ledger is full (15 laps)");
    }

    #[test]
    fn test_export_error_carries_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = WatchError::Export {
            path: PathBuf::from("/tmp/laps.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/laps.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_error_serialization() {
        let err = WatchError::LedgerFull { capacity: 3 };
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Lap ledger is full"));
    }

    #[test]
    fn test_lock_poisoning_recovery() {
        use std::sync::Mutex;

        let mutex = Mutex::new(42);

        // Poison the mutex by panicking while holding the lock
        let _ = std::panic::catch_unwind(|| {
            let _guard = mutex.lock().unwrap();
            panic!("intentional panic to poison mutex");
        });

        // Verify the mutex is poisoned
        assert!(mutex.lock().is_err());

        // Verify LockResultExt properly converts the error
        let result = mutex.lock().map_lock_err("session");
        assert!(matches!(result, Err(WatchError::LockPoisoned { .. })));

        // Verify the context is preserved
        if let Err(WatchError::LockPoisoned { context }) = result {
            assert_eq!(context, "session");
        }
    }
}
