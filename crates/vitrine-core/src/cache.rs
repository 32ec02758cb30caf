//! Recent-history cache
//!
//! The cache is a plain value: it is loaded once per run, a new state is
//! derived with [`PreviewCache::record`], and the caller persists it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StorageError;
use crate::profile::VariantProfile;
use crate::storage::atomic_write_if_changed;

/// Upper bound of `recentVariants`; the oldest entry is evicted first
pub const MAX_RECENT_VARIANTS: usize = 50;

/// Where the day's HTML came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PreviewSource {
    /// Nothing generated yet
    #[default]
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "gpt-app")]
    GptApp,
    #[serde(rename = "gpt-idea+procedural")]
    GptIdeaProcedural,
    #[serde(rename = "local-procedural")]
    LocalProcedural,
}

impl PreviewSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewSource::Local => "local",
            PreviewSource::GptApp => "gpt-app",
            PreviewSource::GptIdeaProcedural => "gpt-idea+procedural",
            PreviewSource::LocalProcedural => "local-procedural",
        }
    }
}

impl std::fmt::Display for PreviewSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheMeta {
    pub source: PreviewSource,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Default for CacheMeta {
    fn default() -> Self {
        Self {
            source: PreviewSource::Local,
            title: "Preview Diário".to_string(),
            subtitle: None,
            template: None,
        }
    }
}

impl CacheMeta {
    /// Full app returned by the remote provider
    pub fn remote_app(title: &str) -> Self {
        Self {
            source: PreviewSource::GptApp,
            title: title.to_string(),
            subtitle: Some("Gerado via GPT".to_string()),
            template: None,
        }
    }

    /// Remote idea rendered by the local pipeline
    pub fn remote_idea(title: &str, domain: &str) -> Self {
        Self {
            source: PreviewSource::GptIdeaProcedural,
            title: title.to_string(),
            subtitle: Some(domain.to_string()),
            template: None,
        }
    }

    /// Fully local generation
    pub fn local(title: &str, domain: &str) -> Self {
        Self {
            source: PreviewSource::LocalProcedural,
            title: title.to_string(),
            subtitle: Some(domain.to_string()),
            template: Some("procedural-lab".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewCache {
    /// Day key of the last successful generation
    pub last_key: Option<String>,
    pub meta: CacheMeta,
    pub recent_variants: Vec<VariantProfile>,
    pub last_variant: Option<VariantProfile>,
}

impl PreviewCache {
    /// Read the cache file. A missing or unparsable file yields an empty cache.
    pub async fn load(path: &Path) -> Self {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No preview cache at {:?}", path);
                return Self::default();
            }
            Err(e) => {
                warn!("Failed to read preview cache {:?}: {}", path, e);
                return Self::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cache) => cache,
            Err(e) => {
                warn!("Ignoring corrupt preview cache {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Pretty-printed JSON written atomically; `Ok(false)` when unchanged
    pub async fn save(&self, path: &Path) -> Result<bool, StorageError> {
        let json = serde_json::to_string_pretty(self)?;
        atomic_write_if_changed(path, &json).await
    }

    /// True when `key` was already generated
    pub fn is_current(&self, key: &str) -> bool {
        self.last_key.as_deref() == Some(key)
    }

    /// Next cache state after generating `key`.
    ///
    /// A profile is appended to the history (trimmed to
    /// [`MAX_RECENT_VARIANTS`], oldest first out) and becomes `lastVariant`.
    /// Remote full-app runs have no profile and leave the history as is.
    pub fn record(&self, key: &str, meta: CacheMeta, profile: Option<VariantProfile>) -> Self {
        let mut recent_variants = self.recent_variants.clone();
        let mut last_variant = self.last_variant.clone();

        if let Some(profile) = profile {
            recent_variants.push(profile.clone());
            if recent_variants.len() > MAX_RECENT_VARIANTS {
                let excess = recent_variants.len() - MAX_RECENT_VARIANTS;
                recent_variants.drain(..excess);
            }
            last_variant = Some(profile);
        }

        Self {
            last_key: Some(key.to_string()),
            meta,
            recent_variants,
            last_variant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::HeroMode;
    use crate::profile::Weights;
    use tempfile::TempDir;

    fn profile(n: usize) -> VariantProfile {
        VariantProfile {
            seed: n as u32,
            key: format!("day-{n}"),
            theme_id: "nebula".to_string(),
            layout_id: "poster".to_string(),
            pattern_id: "grid".to_string(),
            mockup_id: "list".to_string(),
            signature: format!("sig-{n}"),
            accent: "#38bdf8".to_string(),
            weights: Weights::default(),
            parts: vec!["list".to_string()],
            hero_mode: HeroMode::Poster,
        }
    }

    #[test]
    fn test_history_is_bounded_fifo() {
        let mut cache = PreviewCache::default();
        for n in 0..75 {
            cache = cache.record(&format!("day-{n}"), CacheMeta::local("t", "d"), Some(profile(n)));
            assert!(cache.recent_variants.len() <= MAX_RECENT_VARIANTS);
        }
        assert_eq!(cache.recent_variants.len(), MAX_RECENT_VARIANTS);
        assert_eq!(cache.recent_variants[0].key, "day-25");
        assert_eq!(cache.recent_variants[49].key, "day-74");
        assert_eq!(cache.last_variant.as_ref().map(|p| p.key.as_str()), Some("day-74"));
        assert!(cache.is_current("day-74"));
    }

    #[test]
    fn test_remote_app_keeps_history() {
        let cache = PreviewCache::default().record("a", CacheMeta::local("t", "d"), Some(profile(1)));
        let next = cache.record("b", CacheMeta::remote_app("App"), None);
        assert_eq!(next.recent_variants.len(), 1);
        assert_eq!(next.last_variant, cache.last_variant);
        assert_eq!(next.last_key.as_deref(), Some("b"));
        assert_eq!(next.meta.source, PreviewSource::GptApp);
    }

    #[test]
    fn test_meta_json_shape() {
        let json = serde_json::to_value(CacheMeta::local("Checklist", "DevTools")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source": "local-procedural",
                "title": "Checklist",
                "subtitle": "DevTools",
                "template": "procedural-lab"
            })
        );
        let json = serde_json::to_value(CacheMeta::remote_idea("X", "Saúde")).unwrap();
        assert_eq!(json["source"], "gpt-idea+procedural");
        assert!(json.get("template").is_none());
    }

    #[test]
    fn test_legacy_cache_without_history_parses() {
        let raw = r#"{ "lastKey": "2024-01-01", "meta": { "source": "gpt-app", "title": "X", "subtitle": "Gerado via GPT" } }"#;
        let cache: PreviewCache = serde_json::from_str(raw).unwrap();
        assert!(cache.is_current("2024-01-01"));
        assert!(cache.recent_variants.is_empty());
        assert!(cache.last_variant.is_none());
    }

    #[tokio::test]
    async fn test_missing_and_corrupt_files_load_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".preview-2-cache.json");
        assert_eq!(PreviewCache::load(&path).await, PreviewCache::default());

        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(PreviewCache::load(&path).await, PreviewCache::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");
        let cache = PreviewCache::default().record("k", CacheMeta::local("t", "d"), Some(profile(3)));

        assert!(cache.save(&path).await.unwrap());
        assert!(!cache.save(&path).await.unwrap());
        assert_eq!(PreviewCache::load(&path).await, cache);
        assert!(std::fs::read_to_string(&path).unwrap().contains("\n  \"lastKey\""));
    }
}
