//! Remote generation providers
//!
//! The orchestrator only depends on [`GenerationProvider`]; every failure is
//! recoverable and ends in the local pipeline.

mod openai;

pub use openai::OpenAiProvider;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::idea::Idea;

/// A complete app document produced remotely
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectApp {
    pub title: String,
    pub slug: String,
    /// Full HTML document; empty means "no app, ask for an idea instead"
    pub html: String,
}

#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Structured idea metadata for the day
    async fn generate_project_idea(&self, day_key: &str) -> Result<Idea, ProviderError>;

    /// A complete app document for the day
    async fn generate_project_app(&self, day_key: &str) -> Result<ProjectApp, ProviderError>;
}
