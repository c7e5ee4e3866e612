//! Deployment metadata captured once at process start.
//!
//! The CI system hands build information to the process through environment
//! variables. `BuildMetadata` holds those values; `DeploymentSnapshot` adds
//! the deployment time and the host identity and is never mutated afterwards.

use chrono::{DateTime, Utc};

/// Format of `deployed_at`, e.g. `2024-05-01 13:37:00 UTC`.
pub const DEPLOYED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Number of characters of the commit sha shown on the dashboard.
pub const SHORT_SHA_LEN: usize = 12;

/// Placeholder pipeline URL used when the CI system provides none.
pub const NO_PIPELINE_URL: &str = "#";

/// Hostname reported when the host identity cannot be resolved.
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// Build information provided by the CI system.
///
/// `Default` yields the values used for local runs outside of CI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    pub build_version: String,
    pub commit_sha: String,
    pub pipeline_id: String,
    pub pipeline_url: String,
    pub job_id: String,
    pub commit_message: String,
    pub commit_author: String,
}

impl Default for BuildMetadata {
    fn default() -> Self {
        Self {
            build_version: "dev".into(),
            commit_sha: "local".into(),
            pipeline_id: "N/A".into(),
            pipeline_url: NO_PIPELINE_URL.into(),
            job_id: "N/A".into(),
            commit_message: "Local development".into(),
            commit_author: "Developer".into(),
        }
    }
}

/// Immutable view of what is deployed and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentSnapshot {
    build: BuildMetadata,
    deployed_at: String,
    hostname: String,
}

impl DeploymentSnapshot {
    /// Capture the snapshot now, resolving the local hostname.
    pub fn capture(build: BuildMetadata) -> Self {
        Self::at(build, Utc::now(), resolve_hostname())
    }

    /// Build a snapshot from explicit time and hostname.
    pub fn at(build: BuildMetadata, deployed_at: DateTime<Utc>, hostname: impl Into<String>) -> Self {
        Self {
            build,
            deployed_at: format_deployed_at(deployed_at),
            hostname: hostname.into(),
        }
    }

    pub fn build(&self) -> &BuildMetadata {
        &self.build
    }

    pub fn deployed_at(&self) -> &str {
        &self.deployed_at
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// First `SHORT_SHA_LEN` characters of the commit sha (whole sha if shorter).
    pub fn short_sha(&self) -> &str {
        let sha = self.build.commit_sha.as_str();
        match sha.char_indices().nth(SHORT_SHA_LEN) {
            Some((idx, _)) => &sha[..idx],
            None => sha,
        }
    }

    /// Whether the CI system supplied a real pipeline URL.
    pub fn has_pipeline_link(&self) -> bool {
        self.build.pipeline_url != NO_PIPELINE_URL
    }
}

/// Render a timestamp in `DEPLOYED_AT_FORMAT`.
pub fn format_deployed_at(t: DateTime<Utc>) -> String {
    t.format(DEPLOYED_AT_FORMAT).to_string()
}

/// Resolve the host's name, falling back to `UNKNOWN_HOSTNAME`.
pub fn resolve_hostname() -> String {
    match hostname::get() {
        Ok(name) => match name.into_string() {
            Ok(s) => s,
            Err(raw) => {
                tracing::warn!(hostname = ?raw, "hostname is not valid UTF-8");
                UNKNOWN_HOSTNAME.to_string()
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "hostname lookup failed");
            UNKNOWN_HOSTNAME.to_string()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn snapshot_with_sha(sha: &str) -> DeploymentSnapshot {
        let build = BuildMetadata {
            commit_sha: sha.into(),
            ..BuildMetadata::default()
        };
        let t = Utc.with_ymd_and_hms(2024, 5, 1, 13, 37, 0).unwrap();
        DeploymentSnapshot::at(build, t, "node-1")
    }

    #[test]
    fn deployed_at_uses_fixed_format() {
        let snap = snapshot_with_sha("local");
        assert_eq!(snap.deployed_at(), "2024-05-01 13:37:00 UTC");
        assert_eq!(snap.hostname(), "node-1");
    }

    #[test]
    fn short_sha_truncates_to_twelve_chars() {
        let snap = snapshot_with_sha("abcdef0123456789");
        assert_eq!(snap.short_sha(), "abcdef012345");
    }

    #[test]
    fn short_sha_keeps_short_values_whole() {
        assert_eq!(snapshot_with_sha("local").short_sha(), "local");
        assert_eq!(snapshot_with_sha("").short_sha(), "");
    }

    #[test]
    fn short_sha_counts_characters_not_bytes() {
        let snap = snapshot_with_sha("ééééééééééééééé");
        assert_eq!(snap.short_sha().chars().count(), 12);
    }

    #[test]
    fn pipeline_link_only_for_real_urls() {
        let mut build = BuildMetadata::default();
        let t = Utc::now();
        assert!(!DeploymentSnapshot::at(build.clone(), t, "h").has_pipeline_link());

        build.pipeline_url = "https://example.com/pipe".into();
        assert!(DeploymentSnapshot::at(build, t, "h").has_pipeline_link());
    }

    #[test]
    fn defaults_match_local_run_values() {
        let b = BuildMetadata::default();
        assert_eq!(b.build_version, "dev");
        assert_eq!(b.commit_sha, "local");
        assert_eq!(b.pipeline_id, "N/A");
        assert_eq!(b.pipeline_url, "#");
        assert_eq!(b.job_id, "N/A");
        assert_eq!(b.commit_message, "Local development");
        assert_eq!(b.commit_author, "Developer");
    }
}
