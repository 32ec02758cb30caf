//! Environment-driven configuration

use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-5";
pub const DEFAULT_PORT: u16 = 3000;

/// Generated preview, relative to the served root
pub const PREVIEW_FILE: &str = "src/previews/preview-2.html";
/// History cache, relative to the served root
pub const CACHE_FILE: &str = "src/previews/.preview-2-cache.json";

/// Credentials and endpoint of the remote provider
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Directory served over HTTP; previews live under it
    pub root: PathBuf,
    /// Whether daily generation runs at all
    pub enabled: bool,
    /// Remote provider settings, `None` when the remote path is off
    pub remote: Option<RemoteConfig>,
    pub port: u16,
}

/// `1`, `true`, `on`, `yes` (case-insensitive, trimmed)
pub fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

impl PreviewConfig {
    /// Build from any variable lookup, so tests can inject a map
    pub fn from_lookup(root: impl Into<PathBuf>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = is_truthy(
            &lookup("USE_PREVIEW_GENERATION")
                .or_else(|| lookup("USE_PREVIEW2_GENERATION"))
                .unwrap_or_else(|| "1".to_string()),
        );

        let api_key = lookup("OPENAI_API_KEY").unwrap_or_default().trim().to_string();
        let remote_flag = lookup("USE_GPT_PREVIEW")
            .or_else(|| lookup("USE_GPT_PREVIEW2"))
            .or_else(|| lookup("USE_GPT"))
            .map(|raw| raw.trim().to_string())
            .unwrap_or_default();
        let remote_on = if remote_flag.is_empty() {
            !api_key.is_empty()
        } else {
            is_truthy(&remote_flag)
        };

        let remote = (remote_on && !api_key.is_empty()).then(|| RemoteConfig {
            api_key,
            base_url: lookup("OPENAI_BASE_URL")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: lookup("OPENAI_MODEL")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        });

        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            root: root.into(),
            enabled,
            remote,
            port,
        }
    }

    /// Build from the process environment
    pub fn from_env(root: impl Into<PathBuf>) -> Self {
        Self::from_lookup(root, |name| std::env::var(name).ok())
    }

    pub fn preview_path(&self) -> PathBuf {
        self.root.join(PREVIEW_FILE)
    }

    pub fn cache_path(&self) -> PathBuf {
        self.root.join(CACHE_FILE)
    }

    pub fn previews_dir(&self) -> PathBuf {
        self.root.join("src").join("previews")
    }
}
