//! Shared application state for the status server.
//!
//! Everything here is built once at startup and only read afterwards, so the
//! state is a cheap `Arc` clone per request with no locking.

use std::sync::Arc;

use statuspage_core::DeploymentSnapshot;

use crate::config::StatusConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: StatusConfig,
    snapshot: DeploymentSnapshot,
}

impl AppState {
    /// Build application state, capturing the deployment snapshot now.
    pub fn new(cfg: StatusConfig) -> Self {
        let snapshot = DeploymentSnapshot::capture(cfg.build.clone());
        Self::with_snapshot(cfg, snapshot)
    }

    /// Build application state around an already captured snapshot.
    pub fn with_snapshot(cfg: StatusConfig, snapshot: DeploymentSnapshot) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, snapshot }),
        }
    }

    pub fn cfg(&self) -> &StatusConfig {
        &self.inner.cfg
    }

    pub fn snapshot(&self) -> &DeploymentSnapshot {
        &self.inner.snapshot
    }

    pub fn environment(&self) -> &str {
        &self.inner.cfg.environment
    }
}
