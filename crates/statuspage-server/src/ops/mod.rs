//! Machine-readable HTTP endpoints.
//!
//! - `/health` : liveness, with a per-request timestamp
//! - `/info`   : full deployment snapshot plus environment

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::app_state::AppState;

/// Display name reported by `/info`.
pub const APPLICATION_NAME: &str = "Python Flask DevSecOps Demo";

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub build_version: String,
    pub hostname: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InfoReport {
    pub application: String,
    pub version: String,
    pub commit_sha: String,
    pub pipeline_id: String,
    pub job_id: String,
    pub commit_message: String,
    pub commit_author: String,
    pub deployed_at: String,
    pub hostname: String,
    pub environment: String,
}

impl HealthReport {
    /// Health report stamped with the current time.
    pub fn now(state: &AppState) -> Self {
        let snap = state.snapshot();
        Self {
            status: "healthy".into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            build_version: snap.build().build_version.clone(),
            hostname: snap.hostname().to_string(),
        }
    }
}

impl InfoReport {
    pub fn from_state(state: &AppState) -> Self {
        let snap = state.snapshot();
        let build = snap.build();
        Self {
            application: APPLICATION_NAME.into(),
            version: build.build_version.clone(),
            commit_sha: build.commit_sha.clone(),
            pipeline_id: build.pipeline_id.clone(),
            job_id: build.job_id.clone(),
            commit_message: build.commit_message.clone(),
            commit_author: build.commit_author.clone(),
            deployed_at: snap.deployed_at().to_string(),
            hostname: snap.hostname().to_string(),
            environment: state.environment().to_string(),
        }
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::now(&state))
}

pub async fn info(State(state): State<AppState>) -> Json<InfoReport> {
    Json(InfoReport::from_state(&state))
}
