//! Window event handlers.

use tauri::{Window, WindowEvent};

use crate::config::app::is_close_to_tray;

/// Handle window events for the application.
///
/// This is called from the Tauri builder's `on_window_event` hook.
pub fn handle_window_event(window: &Window, event: &WindowEvent) {
    if let WindowEvent::CloseRequested { api, .. } = event {
        // Hide to tray instead of closing the main window (if enabled);
        // the tray's Quit entry is then the only way out of the process.
        if window.label() == "main" && is_close_to_tray() {
            api.prevent_close();
            let _ = window.hide();
        }
    }
}
