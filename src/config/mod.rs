//! Application configuration management.
//!
//! Runtime preferences live in a typed struct behind `parking_lot::RwLock`
//! so the frontend can batch-update them in a single IPC call. Nothing here
//! is persisted across runs.

pub mod app;

pub use app::{AppConfig, APP_CONFIG};
