//! Core library for Vitrine
//!
//! Seeded daily preview generation:
//! - `rng` / `color` - deterministic randomness and perceptual color math
//! - `pools` - static catalogs (copy, theme presets, layouts, patterns)
//! - `select` / `mockup` - variant selection and visual widgets
//! - `render` - the self-contained HTML shell
//! - `generator` - the seeded pipeline with repetition avoidance
//! - `cache` / `storage` - recent-history state and atomic writes
//! - `provider` - optional remote generation
//! - `orchestrator` / `scheduler` - the once-per-UTC-day job

pub mod cache;
pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod idea;
pub mod mockup;
pub mod orchestrator;
pub mod pools;
pub mod profile;
pub mod provider;
pub mod render;
pub mod rng;
pub mod scheduler;
pub mod select;
pub mod storage;

pub use cache::{CacheMeta, PreviewCache, PreviewSource, MAX_RECENT_VARIANTS};
pub use config::{PreviewConfig, RemoteConfig};
pub use error::{ProviderError, StorageError};
pub use generator::{generate_procedural_preview, ProceduralPreview};
pub use idea::{day_key, generate_idea_locally, seed_from_key, Idea};
pub use orchestrator::{DailyOrchestrator, DailyOutcome};
pub use profile::{VariantProfile, Weights};
pub use provider::{GenerationProvider, OpenAiProvider, ProjectApp};
pub use rng::SeededRng;
pub use storage::atomic_write_if_changed;
