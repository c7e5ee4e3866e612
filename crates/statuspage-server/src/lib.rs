//! Status server library entry.
//!
//! Wires configuration, the startup snapshot, and the HTTP surface
//! (dashboard, health, info) into an axum router. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod views;
