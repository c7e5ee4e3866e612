//! Shared error type across statuspage crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Configuration could not be loaded or validated.
    ConfigInvalid,
    /// Socket or other I/O failure.
    Io,
    /// HTML view failed to render.
    RenderFailed,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::ConfigInvalid => "CONFIG_INVALID",
            ClientCode::Io => "IO",
            ClientCode::RenderFailed => "RENDER_FAILED",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatusPageError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum StatusPageError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("render failed: {0}")]
    Render(String),
}

impl StatusPageError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            StatusPageError::Config(_) => ClientCode::ConfigInvalid,
            StatusPageError::Io(_) => ClientCode::Io,
            StatusPageError::Render(_) => ClientCode::RenderFailed,
        }
    }
}
