use std::sync::Mutex;

use tauri::{image::Image, Manager};

mod app;
mod commands;
mod config;
pub mod error;
pub mod stopwatch;
mod tick;

use stopwatch::StopwatchSession;

pub fn run() {
    // Console logging for development; persistent file logs are wired in setup
    let _ = env_logger::try_init();

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            // A second launch just surfaces the existing window
            if let Some(window) = app.get_webview_window("main") {
                let _ = window.show();
                let _ = window.set_focus();
            }
        }))
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .on_window_event(app::events::handle_window_event)
        .invoke_handler(tauri::generate_handler![
            // Session commands
            commands::session::start_stopwatch,
            commands::session::stop_stopwatch,
            commands::session::reset_stopwatch,
            commands::session::get_session_state,
            // Export commands
            commands::export::export_laps,
            // Logging commands
            commands::logging::write_log,
            commands::logging::get_log_dir,
            // Config commands
            config::app::set_close_to_tray,
            config::app::get_app_config,
            config::app::set_app_config,
        ])
        .setup(|app| {
            if let Err(e) = commands::logging::init_logging(app.handle()) {
                log::warn!("File logging unavailable: {}", e);
            }

            app.manage(Mutex::new(StopwatchSession::new()));

            app::tray::init(app)?;

            // Set window icon and show main window
            if let Some(window) = app.get_webview_window("main") {
                let icon = Image::from_bytes(include_bytes!("../icons/32x32.png"))
                    .expect("Failed to load window icon");
                let _ = window.set_icon(icon);
                let _ = window.show();
            }

            // Label refresh loops; state must be managed before this point
            tick::spawn(app.handle());

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
