//! Web bootstrap configuration surface.
//!
//! # Responsibility
//! - Model the fixed option set the web embedder reads once at startup.
//! - Parse it from the bootstrap JSON payload with stable field names.
//!
//! # Invariants
//! - Unknown renderer names are rejected at parse time.
//! - Defaults mirror the development bootstrap payload.
//! - Options are read-only after startup; there is no reload path.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Default serving base address for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Bootstrap configuration failures.
#[derive(Debug)]
pub enum BootstrapError {
    /// Payload file could not be read.
    Io(std::io::Error),
    /// Payload was not valid bootstrap JSON.
    Parse(serde_json::Error),
    /// Serving base address is empty.
    EmptyApiBaseUrl,
    /// Serving base address is not reachable over HTTP(S).
    UnsupportedApiBaseUrl(String),
}

impl Display for BootstrapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "bootstrap payload unreadable: {err}"),
            Self::Parse(err) => write!(f, "bootstrap payload invalid: {err}"),
            Self::EmptyApiBaseUrl => write!(f, "apiBaseUrl cannot be empty"),
            Self::UnsupportedApiBaseUrl(value) => {
                write!(f, "apiBaseUrl must be http(s), got `{value}`")
            }
        }
    }
}

impl Error for BootstrapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Rendering backend handed to the engine initializer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Renderer {
    /// Skia-backed renderer, the default.
    #[default]
    Canvaskit,
    /// DOM renderer for lighter payloads.
    Html,
}

impl Renderer {
    /// Name used in the bootstrap payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canvaskit => "canvaskit",
            Self::Html => "html",
        }
    }
}

/// Startup options consumed once by the web embedder.
///
/// Not part of the bridge contract; the shell never sees these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BootstrapConfig {
    /// Base address the front-end talks to.
    pub api_base_url: String,
    /// Route API calls through the development CORS proxy.
    pub enable_cors_proxy: bool,
    /// Verbose engine diagnostics.
    pub debug_mode: bool,
    /// Rendering backend selection.
    pub renderer: Renderer,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            enable_cors_proxy: true,
            debug_mode: true,
            renderer: Renderer::Canvaskit,
        }
    }
}

impl BootstrapConfig {
    /// Parses a bootstrap payload and validates it.
    ///
    /// # Errors
    /// - Returns an error when the payload is not valid JSON for this shape.
    /// - Returns an error when the base address fails [`Self::validate`].
    pub fn from_json_str(payload: &str) -> BootstrapResult<Self> {
        let config: Self = serde_json::from_str(payload).map_err(BootstrapError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a bootstrap payload file.
    ///
    /// # Errors
    /// - Returns an error when the file cannot be read.
    /// - Propagates [`Self::from_json_str`] errors.
    pub fn from_file(path: impl AsRef<Path>) -> BootstrapResult<Self> {
        let payload = std::fs::read_to_string(path).map_err(BootstrapError::Io)?;
        Self::from_json_str(&payload)
    }

    /// Checks option-level invariants.
    ///
    /// # Errors
    /// - Returns an error when the base address is empty or non-HTTP(S).
    pub fn validate(&self) -> BootstrapResult<()> {
        let base = self.api_base_url.trim();
        if base.is_empty() {
            return Err(BootstrapError::EmptyApiBaseUrl);
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(BootstrapError::UnsupportedApiBaseUrl(base.to_string()));
        }
        Ok(())
    }
}
