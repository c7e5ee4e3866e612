//! Top-level facade crate for statuspage.
//!
//! Re-exports the core model and the server library so users can depend on a single crate.

pub mod core {
    pub use statuspage_core::*;
}

pub mod server {
    pub use statuspage_server::*;
}
