//! Variant profiles: the recorded choice for one day

use serde::{Deserialize, Serialize};

use crate::pools::HeroMode;

/// Relative influence of each axis in the pin panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub theme: f64,
    pub layout: f64,
    pub pattern: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            theme: 0.42,
            layout: 0.33,
            pattern: 0.25,
        }
    }
}

/// Full recorded combination for one day key. This is the unit of history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantProfile {
    pub seed: u32,
    pub key: String,
    pub theme_id: String,
    pub layout_id: String,
    pub pattern_id: String,
    pub mockup_id: String,
    /// `themeId|layoutId|patternId|mockupSignature`
    pub signature: String,
    pub accent: String,
    #[serde(default)]
    pub weights: Weights,
    #[serde(default)]
    pub parts: Vec<String>,
    pub hero_mode: HeroMode,
}

/// Composite signature used for repetition checks
pub fn composite_signature(
    theme_id: &str,
    layout_id: &str,
    pattern_id: &str,
    mockup_signature: &str,
) -> String {
    format!("{theme_id}|{layout_id}|{pattern_id}|{mockup_signature}")
}
