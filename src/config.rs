//! Configuration - API key from the environment, optional file overrides
//!
//! Resolution order for model and endpoint: environment variable, then
//! `~/.promptforge/config.yaml`, then built-in defaults. The API key is only
//! ever read from the environment.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::{
    API_KEY_ENV, API_URL_ENV, CONFIG_FILE, DEFAULT_API_URL, DEFAULT_MODEL, MODEL_ENV,
};

/// Optional on-disk overrides.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Resolved settings for the Generative Language API.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl GeminiConfig {
    /// Load from the environment and the optional config file.
    ///
    /// Fails when the API key is missing so the caller can bail out before
    /// the terminal enters raw mode.
    pub fn load() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .with_context(|| format!("{} is not set; export your Gemini API key", API_KEY_ENV))?;

        let file = config_path()
            .and_then(|path| read_file_config(&path))
            .unwrap_or_default();

        Ok(Self::resolve(
            api_key,
            file,
            std::env::var(MODEL_ENV).ok(),
            std::env::var(API_URL_ENV).ok(),
        ))
    }

    fn resolve(
        api_key: String,
        file: FileConfig,
        model_env: Option<String>,
        api_url_env: Option<String>,
    ) -> Self {
        let model = model_env
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_url = api_url_env
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        GeminiConfig { api_key, model, api_url }
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

/// Read and parse the config file. A missing file is normal; a malformed one
/// is logged and ignored rather than blocking startup.
fn read_file_config(path: &Path) -> Option<FileConfig> {
    let content = fs::read_to_string(path).ok()?;
    match serde_yaml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed config file");
            None
        }
    }
}
