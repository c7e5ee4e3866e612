use statuspage_core::error::{Result, StatusPageError};
use statuspage_core::BuildMetadata;

pub const CI_COMMIT_SHORT_SHA: &str = "CI_COMMIT_SHORT_SHA";
pub const CI_COMMIT_SHA: &str = "CI_COMMIT_SHA";
pub const CI_PIPELINE_ID: &str = "CI_PIPELINE_ID";
pub const CI_PIPELINE_URL: &str = "CI_PIPELINE_URL";
pub const CI_JOB_ID: &str = "CI_JOB_ID";
pub const CI_COMMIT_MESSAGE: &str = "CI_COMMIT_MESSAGE";
pub const CI_COMMIT_AUTHOR: &str = "CI_COMMIT_AUTHOR";
pub const FLASK_ENV: &str = "FLASK_ENV";
pub const FLASK_RUN_HOST: &str = "FLASK_RUN_HOST";
pub const FLASK_RUN_PORT: &str = "FLASK_RUN_PORT";

#[derive(Debug, Clone)]
pub struct StatusConfig {
    pub server: ServerSection,

    /// Reported as `environment` by `/info`.
    pub environment: String,

    pub build: BuildMetadata,
}

impl StatusConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = BuildMetadata::default();
        let var = |key: &str, default: String| lookup(key).unwrap_or(default);

        let build = BuildMetadata {
            build_version: var(CI_COMMIT_SHORT_SHA, defaults.build_version),
            commit_sha: var(CI_COMMIT_SHA, defaults.commit_sha),
            pipeline_id: var(CI_PIPELINE_ID, defaults.pipeline_id),
            pipeline_url: var(CI_PIPELINE_URL, defaults.pipeline_url),
            job_id: var(CI_JOB_ID, defaults.job_id),
            commit_message: var(CI_COMMIT_MESSAGE, defaults.commit_message),
            commit_author: var(CI_COMMIT_AUTHOR, defaults.commit_author),
        };

        let port = match lookup(FLASK_RUN_PORT) {
            Some(raw) => parse_port(&raw)?,
            None => default_port(),
        };

        Ok(Self {
            server: ServerSection {
                host: lookup(FLASK_RUN_HOST).unwrap_or_else(default_host),
                port,
            },
            environment: lookup(FLASK_ENV).unwrap_or_else(default_environment),
            build,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(StatusPageError::Config(format!(
                "{FLASK_RUN_HOST} must not be empty"
            )));
        }
        Ok(())
    }

    /// `host:port` as handed to the listener (host may be a name).
    pub fn bind_target(&self) -> (String, u16) {
        (self.host.trim().to_string(), self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim().parse::<u16>().map_err(|e| {
        StatusPageError::Config(format!("{FLASK_RUN_PORT} must be a port number, got {raw:?}: {e}"))
    })
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    5000
}
fn default_environment() -> String {
    "production".into()
}
