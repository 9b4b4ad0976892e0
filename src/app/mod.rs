//! Application lifecycle and platform integration.
//!
//! - `tray`: system tray setup and menu handling
//! - `events`: window event handlers

pub mod events;
pub mod tray;
