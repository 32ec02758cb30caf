//! Layout variants
//!
//! Each CSS fragment only overrides grid placement of the four stage areas
//! (`hero`, `preview`, `features`, `pin`); the base rules live in the shell.

use serde::{Deserialize, Serialize};

/// How the hero block is composed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroMode {
    Centered,
    Split,
    Column,
    Grid,
    Stacked,
    Poster,
}

impl HeroMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeroMode::Centered => "centered",
            HeroMode::Split => "split",
            HeroMode::Column => "column",
            HeroMode::Grid => "grid",
            HeroMode::Stacked => "stacked",
            HeroMode::Poster => "poster",
        }
    }
}

#[derive(Debug)]
pub struct LayoutVariant {
    pub id: &'static str,
    pub weight: f64,
    pub hero_mode: HeroMode,
    /// Features shown in the feature rail
    pub feature_count: usize,
    pub css: &'static str,
}

pub static LAYOUT_VARIANTS: &[LayoutVariant] = &[
    LayoutVariant {
        id: "focus-center",
        weight: 1.2,
        hero_mode: HeroMode::Centered,
        feature_count: 3,
        css: r#"
      .stage { grid-template-columns: minmax(0, 1fr); grid-template-areas: "hero" "preview" "features" "pin"; max-width: 880px; }
      .hero { text-align: center; align-items: center; }
      .hero__chips { justify-content: center; }
"#,
    },
    LayoutVariant {
        id: "sidekick",
        weight: 1.0,
        hero_mode: HeroMode::Split,
        feature_count: 4,
        css: r#"
      .stage { grid-template-columns: minmax(0, 1.35fr) minmax(0, 1fr); grid-template-areas: "hero hero" "preview features" "preview pin"; }
      .hero { flex-direction: row; justify-content: space-between; align-items: flex-end; }
"#,
    },
    LayoutVariant {
        id: "tower",
        weight: 0.9,
        hero_mode: HeroMode::Column,
        feature_count: 4,
        css: r#"
      .stage { grid-template-columns: minmax(240px, 0.8fr) minmax(0, 1.6fr); grid-template-areas: "hero preview" "features preview" "pin pin"; }
      .hero { position: sticky; top: 32px; align-self: start; }
"#,
    },
    LayoutVariant {
        id: "gallery",
        weight: 0.8,
        hero_mode: HeroMode::Grid,
        feature_count: 4,
        css: r#"
      .stage { grid-template-columns: repeat(2, minmax(0, 1fr)); grid-template-areas: "hero features" "preview preview" "pin pin"; }
      .features ul { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); }
"#,
    },
    LayoutVariant {
        id: "stacked",
        weight: 1.0,
        hero_mode: HeroMode::Stacked,
        feature_count: 3,
        css: r#"
      .stage { grid-template-columns: minmax(0, 1fr); grid-template-areas: "hero" "features" "preview" "pin"; max-width: 760px; }
      .features ul { flex-direction: row; flex-wrap: wrap; }
"#,
    },
    LayoutVariant {
        id: "poster",
        weight: 0.7,
        hero_mode: HeroMode::Poster,
        feature_count: 2,
        css: r#"
      .stage { grid-template-columns: minmax(0, 1.1fr) minmax(0, 1fr); grid-template-areas: "hero hero" "preview features" "pin pin"; }
      .hero { min-height: 46vh; justify-content: flex-end; }
      .hero h1 { font-size: clamp(2.4rem, 7vw, 4.6rem); line-height: 1.02; }
"#,
    },
];
