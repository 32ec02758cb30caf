//! Once-per-UTC-day preview job
//!
//! `run_for_key` walks check-cache → generate → persist. Generation prefers a
//! remote full app, then a remote idea rendered locally, then a fully local
//! idea. Remote failures only log; write failures are returned.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{CacheMeta, PreviewCache, PreviewSource};
use crate::config::PreviewConfig;
use crate::error::ProviderError;
use crate::generator::generate_procedural_preview;
use crate::idea::{day_key, generate_idea_locally, Idea};
use crate::profile::VariantProfile;
use crate::provider::{GenerationProvider, OpenAiProvider};
use crate::storage::atomic_write_if_changed;

/// What a run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyOutcome {
    /// Generation is switched off by configuration
    Disabled,
    /// The cache already holds this day key
    UpToDate,
    Generated {
        source: PreviewSource,
        title: String,
        /// Whether each file was actually replaced
        html_changed: bool,
        cache_changed: bool,
        retries: u32,
    },
}

/// One day's artifact before it is persisted
#[derive(Debug, Clone)]
pub struct DailyArtifact {
    pub html: String,
    pub meta: CacheMeta,
    /// Absent for remote full-app documents
    pub profile: Option<VariantProfile>,
    pub retries: u32,
}

pub struct DailyOrchestrator {
    config: PreviewConfig,
    provider: Option<Arc<dyn GenerationProvider>>,
    /// Serialises runs from the scheduler and the file server
    run_lock: Mutex<()>,
}

impl DailyOrchestrator {
    pub fn new(config: PreviewConfig, provider: Option<Arc<dyn GenerationProvider>>) -> Self {
        Self {
            config,
            provider,
            run_lock: Mutex::new(()),
        }
    }

    /// Wire the OpenAI provider when the configuration enables it
    pub fn from_config(config: PreviewConfig) -> Self {
        let provider = config.remote.clone().and_then(|remote| {
            match OpenAiProvider::new(remote, config.previews_dir()) {
                Ok(provider) => Some(Arc::new(provider) as Arc<dyn GenerationProvider>),
                Err(e) => {
                    warn!("Remote provider disabled: {}", e);
                    None
                }
            }
        });
        Self::new(config, provider)
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn remote_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Run for the current UTC day
    pub async fn run_today(&self) -> Result<DailyOutcome> {
        self.run_for_key(&day_key(Utc::now())).await
    }

    /// Run for an explicit day key. Idempotent within a key.
    pub async fn run_for_key(&self, key: &str) -> Result<DailyOutcome> {
        if !self.config.enabled {
            return Ok(DailyOutcome::Disabled);
        }
        let _guard = self.run_lock.lock().await;

        let cache_path = self.config.cache_path();
        let cache = PreviewCache::load(&cache_path).await;
        if cache.is_current(key) {
            debug!("Preview already generated for {}", key);
            return Ok(DailyOutcome::UpToDate);
        }

        let artifact = self.generate(key, &cache).await;
        let next = cache.record(key, artifact.meta.clone(), artifact.profile.clone());

        let preview_path = self.config.preview_path();
        let html_changed = atomic_write_if_changed(&preview_path, &artifact.html)
            .await
            .with_context(|| format!("Failed to write preview {:?}", preview_path))?;
        let cache_changed = next
            .save(&cache_path)
            .await
            .with_context(|| format!("Failed to write cache {:?}", cache_path))?;

        if html_changed || cache_changed {
            info!(
                "Preview updated ({}) · {}",
                artifact.meta.source, artifact.meta.title
            );
        }

        Ok(DailyOutcome::Generated {
            source: artifact.meta.source,
            title: artifact.meta.title,
            html_changed,
            cache_changed,
            retries: artifact.retries,
        })
    }

    /// Produce the artifact for `key` given the current cache state. Never
    /// fails: every remote problem falls through to local generation.
    pub async fn generate(&self, key: &str, cache: &PreviewCache) -> DailyArtifact {
        let history = &cache.recent_variants;

        if let Some(provider) = &self.provider {
            match self.try_remote(provider.as_ref(), key).await {
                Ok(RemoteResult::App { title, html }) => {
                    info!("Full app generated remotely");
                    return DailyArtifact {
                        html,
                        meta: CacheMeta::remote_app(&title),
                        profile: None,
                        retries: 0,
                    };
                }
                Ok(RemoteResult::Idea(idea)) => {
                    info!("Remote idea rendered by the local generator");
                    let preview = generate_procedural_preview(key, &idea, history);
                    return DailyArtifact {
                        html: preview.html,
                        meta: CacheMeta::remote_idea(&idea.title, &idea.domain),
                        profile: Some(preview.profile),
                        retries: preview.retries,
                    };
                }
                Err(e) => warn!("Remote generation failed, using local generator: {}", e),
            }
        }

        let idea = generate_idea_locally(key);
        let preview = generate_procedural_preview(key, &idea, history);
        DailyArtifact {
            html: preview.html,
            meta: CacheMeta::local(&idea.title, &idea.domain),
            profile: Some(preview.profile),
            retries: preview.retries,
        }
    }

    async fn try_remote(
        &self,
        provider: &dyn GenerationProvider,
        key: &str,
    ) -> Result<RemoteResult, ProviderError> {
        let app = provider.generate_project_app(key).await?;
        if !app.html.trim().is_empty() {
            return Ok(RemoteResult::App {
                title: app.title,
                html: app.html,
            });
        }
        let idea = provider.generate_project_idea(key).await?;
        Ok(RemoteResult::Idea(idea))
    }
}

enum RemoteResult {
    App { title: String, html: String },
    Idea(Idea),
}
