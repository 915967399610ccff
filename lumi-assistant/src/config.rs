use std::env;

use tracing::warn;

use crate::persona;

/// Environment variable the credential is normally read from.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Legacy variable name the original deployment used; still honored.
pub const LEGACY_API_KEY_ENV: &str = "API_KEY";

/// Optional override of the API host, mainly for pointing the assistant at
/// a local mock server.
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";

/// Runtime configuration for the assistant. A missing credential is not an
/// error here: startup must never crash on configuration alone, the send
/// path degrades to the connectivity fallback instead.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: persona::ASSISTANT_MODEL.to_string(),
            base_url: None,
        }
    }
}

impl AssistantConfig {
    /// Read the credential (and optional host override) from the process
    /// environment. Logs a warning when no credential is present.
    pub fn from_env() -> Self {
        let api_key = resolve_key(
            env::var(API_KEY_ENV).ok(),
            env::var(LEGACY_API_KEY_ENV).ok(),
        );

        if api_key.is_none() {
            warn!(
                "{} not found in environment variables; chat sends will fail with the connectivity fallback",
                API_KEY_ENV
            );
        }

        Self {
            api_key,
            base_url: env::var(BASE_URL_ENV).ok().filter(|url| !url.is_empty()),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Pick the first usable credential; empty values count as absent.
fn resolve_key(primary: Option<String>, legacy: Option<String>) -> Option<String> {
    primary
        .filter(|key| !key.is_empty())
        .or_else(|| legacy.filter(|key| !key.is_empty()))
}
