//! Background texture recipes

use crate::color::hex_to_rgba;
use crate::select::Theme;

pub struct PatternVariant {
    pub id: &'static str,
    pub weight: f64,
    /// Renders the `background-image` value for a resolved theme
    pub build: fn(&Theme) -> String,
}

impl std::fmt::Debug for PatternVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternVariant")
            .field("id", &self.id)
            .field("weight", &self.weight)
            .finish()
    }
}

fn grid(theme: &Theme) -> String {
    let line = hex_to_rgba(theme.accent, 0.08);
    format!(
        "linear-gradient({line} 1px, transparent 1px), linear-gradient(90deg, {line} 1px, transparent 1px)"
    )
}

fn dots(theme: &Theme) -> String {
    format!(
        "radial-gradient({} 1.2px, transparent 1.6px)",
        hex_to_rgba(theme.highlight, 0.22)
    )
}

fn diagonal(theme: &Theme) -> String {
    format!(
        "repeating-linear-gradient(135deg, {} 0 2px, transparent 2px 18px)",
        hex_to_rgba(theme.accent, 0.07)
    )
}

fn aurora(theme: &Theme) -> String {
    format!(
        "conic-gradient(from 210deg at 70% 20%, {}, transparent 30%, {}, transparent 70%)",
        hex_to_rgba(theme.accent, 0.14),
        hex_to_rgba(theme.highlight, 0.12)
    )
}

fn rings(theme: &Theme) -> String {
    format!(
        "repeating-radial-gradient(circle at 85% 15%, {} 0 1px, transparent 1px 28px)",
        hex_to_rgba(theme.highlight, 0.10)
    )
}

fn weave(theme: &Theme) -> String {
    let a = hex_to_rgba(theme.accent, 0.06);
    let h = hex_to_rgba(theme.highlight, 0.06);
    format!(
        "repeating-linear-gradient(45deg, {a} 0 6px, transparent 6px 24px), repeating-linear-gradient(-45deg, {h} 0 6px, transparent 6px 24px)"
    )
}

pub static PATTERN_VARIANTS: &[PatternVariant] = &[
    PatternVariant { id: "grid", weight: 1.0, build: grid },
    PatternVariant { id: "dots", weight: 1.0, build: dots },
    PatternVariant { id: "diagonal", weight: 0.9, build: diagonal },
    PatternVariant { id: "aurora", weight: 0.8, build: aurora },
    PatternVariant { id: "rings", weight: 0.7, build: rings },
    PatternVariant { id: "weave", weight: 0.6, build: weave },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::{FONT_STACKS, THEME_PRESETS};

    #[test]
    fn test_patterns_use_theme_colors() {
        let theme = Theme::from_preset(&THEME_PRESETS[0], "#38bdf8", "#f472b6", FONT_STACKS[0]);
        for pattern in PATTERN_VARIANTS {
            let css = (pattern.build)(&theme);
            assert!(css.contains("gradient("), "{}", pattern.id);
            assert!(css.contains("rgba("), "{}", pattern.id);
        }
        assert!(grid(&theme).contains("rgba(56, 189, 248, 0.08)"));
    }
}
