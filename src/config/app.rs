//! Application-level configuration.
//!
//! Uses `parking_lot::RwLock` for thread-safe access (non-poisoning, fast).

use lazy_static::lazy_static;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Global app configuration.
    pub static ref APP_CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

/// Application-wide user preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Hide to the system tray instead of closing when clicking X.
    pub close_to_tray: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            close_to_tray: true,
        }
    }
}

// ============================================================================
// Getters (for internal Rust use)
// ============================================================================

/// Check if close-to-tray is enabled.
pub fn is_close_to_tray() -> bool {
    APP_CONFIG.read().close_to_tray
}

// ============================================================================
// Tauri Commands
// ============================================================================

/// Set close-to-tray behavior.
#[tauri::command]
pub fn set_close_to_tray(enabled: bool) {
    log::debug!("[APP_CONFIG] set_close_to_tray({})", enabled);
    APP_CONFIG.write().close_to_tray = enabled;
}

/// Get the current app configuration.
#[tauri::command]
pub fn get_app_config() -> AppConfig {
    APP_CONFIG.read().clone()
}

/// Set the entire app configuration at once (for frontend sync).
#[tauri::command]
pub fn set_app_config(config: AppConfig) {
    log::debug!("[APP_CONFIG] set_app_config({:?})", config);
    *APP_CONFIG.write() = config;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.close_to_tray);
    }

    #[test]
    fn test_close_to_tray() {
        // Reset to default
        *APP_CONFIG.write() = AppConfig::default();

        assert!(is_close_to_tray());

        APP_CONFIG.write().close_to_tray = false;
        assert!(!is_close_to_tray());

        // Reset
        *APP_CONFIG.write() = AppConfig::default();
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = AppConfig { close_to_tray: false };
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains("closeToTray"));

        let restored: AppConfig = serde_json::from_str(&json).expect("deserialize");
        assert!(!restored.close_to_tray);
    }
}
