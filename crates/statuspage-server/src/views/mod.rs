//! Human-facing dashboard (`GET /`).

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use statuspage_core::{DeploymentSnapshot, StatusPageError};

use crate::app_state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub build_version: &'a str,
    pub short_sha: &'a str,
    pub pipeline_id: &'a str,
    pub pipeline_url: &'a str,
    pub show_pipeline_link: bool,
    pub job_id: &'a str,
    pub commit_message: &'a str,
    pub commit_author: &'a str,
    pub deployed_at: &'a str,
    pub hostname: &'a str,
}

impl<'a> IndexPage<'a> {
    pub fn from_snapshot(snap: &'a DeploymentSnapshot) -> Self {
        let build = snap.build();
        Self {
            build_version: &build.build_version,
            short_sha: snap.short_sha(),
            pipeline_id: &build.pipeline_id,
            pipeline_url: &build.pipeline_url,
            show_pipeline_link: snap.has_pipeline_link(),
            job_id: &build.job_id,
            commit_message: &build.commit_message,
            commit_author: &build.commit_author,
            deployed_at: snap.deployed_at(),
            hostname: snap.hostname(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

/// Renders an askama template into an HTML response.
pub struct HtmlTemplate<T>(pub T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => {
                let err = StatusPageError::Render(e.to_string());
                tracing::error!(error = %err, "dashboard render failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        code: err.client_code().as_str(),
                        message: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

pub async fn index(State(state): State<AppState>) -> Response {
    HtmlTemplate(IndexPage::from_snapshot(state.snapshot())).into_response()
}
