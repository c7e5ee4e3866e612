//! statuspage core: deployment metadata model and error types.
//!
//! This crate owns the immutable `DeploymentSnapshot` that the server renders
//! and the error surface shared with the server crate. It carries no HTTP or
//! runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Fallible paths surface as `StatusPageError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod snapshot;

/// Shared result type.
pub use error::{Result, StatusPageError};
pub use snapshot::{BuildMetadata, DeploymentSnapshot};
