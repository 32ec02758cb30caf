use crate::color::{color_delta_e, hex_to_rgba, is_hex_color};
use crate::pools::{FontStack, LayerTone, ThemePreset, FONT_STACKS, THEME_PRESETS};
use crate::profile::VariantProfile;
use crate::rng::SeededRng;

use super::{narrow, weighted_pick};

/// Minimum ΔE between today's accent and yesterday's
const ACCENT_MIN_DELTA: f64 = 10.0;
/// Minimum ΔE between the highlight and the accent
const HIGHLIGHT_MIN_DELTA: f64 = 6.0;

/// A preset with one accent, one highlight and one font pair fixed
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: &'static str,
    /// Composed `layer, layer, base` background value
    pub background: String,
    pub base: &'static str,
    pub surface: &'static str,
    pub panel: &'static str,
    pub surface_soft: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_soft: String,
    pub accent_strong: String,
    pub highlight: &'static str,
    pub highlight_soft: String,
    pub shadow: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub font: FontStack,
}

impl Theme {
    pub fn from_preset(
        preset: &'static ThemePreset,
        accent: &'static str,
        highlight: &'static str,
        font: FontStack,
    ) -> Self {
        let accent_soft = hex_to_rgba(accent, 0.22);
        let highlight_soft = hex_to_rgba(highlight, 0.20);

        let mut layers: Vec<String> = preset
            .background_layers
            .iter()
            .map(|layer| {
                let color = match layer.tone {
                    LayerTone::Accent => &accent_soft,
                    LayerTone::Highlight => &highlight_soft,
                };
                format!(
                    "{}-gradient({} at {}, {}, transparent {})",
                    layer.shape, layer.size, layer.position, color, layer.stop
                )
            })
            .collect();
        layers.push(preset.base.to_string());

        Self {
            id: preset.id,
            background: layers.join(", "),
            base: preset.base,
            surface: preset.surface,
            panel: preset.panel,
            surface_soft: preset.surface_soft,
            text: preset.text,
            muted: preset.muted,
            border: preset.border,
            accent,
            accent_strong: hex_to_rgba(accent, 0.36),
            accent_soft,
            highlight,
            highlight_soft,
            shadow: preset.shadow,
            success: preset.success,
            warning: preset.warning,
            font,
        }
    }

    /// Unique hex colors of the theme, used by palette swatches
    pub fn palette(&self) -> Vec<&'static str> {
        let mut colors: Vec<&'static str> = Vec::with_capacity(6);
        for color in [
            self.accent,
            self.highlight,
            self.success,
            self.warning,
            self.surface,
            self.base,
        ] {
            if is_hex_color(color) && !colors.contains(&color) {
                colors.push(color);
            }
        }
        colors
    }
}

/// Pick today's theme.
///
/// Draw order (always exactly four draws):
/// 1. weighted preset pick, excluding the previous theme and `avoid_id`
///    while more than one candidate remains;
/// 2. accent scan offset;
/// 3. highlight scan offset;
/// 4. font stack.
pub fn select_theme(
    rng: &mut SeededRng,
    previous: Option<&VariantProfile>,
    avoid_id: Option<&str>,
) -> Theme {
    let previous_id = previous.map(|p| p.theme_id.as_str());
    let previous_accent = previous
        .map(|p| p.accent.as_str())
        .filter(|accent| is_hex_color(accent));

    let candidates = narrow(THEME_PRESETS, |p| p.id, &[previous_id, avoid_id]);
    let mut preset = weighted_pick(rng, &candidates, |p| p.weight).unwrap_or(&THEME_PRESETS[0]);

    let offset = rng.index(preset.accents.len().max(1));
    let mut accent = preset.accents.get(offset).copied().unwrap_or(preset.base);

    if let Some(prev_accent) = previous_accent {
        let distinct = |color: &str| color_delta_e(color, prev_accent) >= ACCENT_MIN_DELTA;
        if let Some(found) = scan_from(preset.accents, offset, |c| distinct(c)) {
            accent = found;
        } else {
            let tried = preset.id;
            let alternate = THEME_PRESETS
                .iter()
                .filter(|p| p.id != tried && Some(p.id) != previous_id && Some(p.id) != avoid_id)
                .find_map(|p| {
                    p.accents
                        .iter()
                        .copied()
                        .find(|&c| distinct(c))
                        .map(|c| (p, c))
                });
            if let Some((alt_preset, alt_accent)) = alternate {
                preset = alt_preset;
                accent = alt_accent;
            }
        }
    }

    let choices: Vec<&'static str> = preset
        .highlights
        .iter()
        .copied()
        .filter(|h| *h != accent)
        .collect();
    let offset = rng.index(choices.len().max(1));
    let highlight = scan_from(&choices, offset, |h| {
        color_delta_e(h, accent) >= HIGHLIGHT_MIN_DELTA
    })
    .or_else(|| choices.first().copied())
    .unwrap_or(accent);

    let font = rng.pick(FONT_STACKS).copied().unwrap_or(FONT_STACKS[0]);

    Theme::from_preset(preset, accent, highlight, font)
}

/// Cyclic scan starting at `offset`
fn scan_from(
    colors: &[&'static str],
    offset: usize,
    accept: impl Fn(&str) -> bool,
) -> Option<&'static str> {
    let len = colors.len();
    (0..len)
        .map(|i| colors[(offset + i) % len])
        .find(|&c| accept(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::HeroMode;
    use crate::profile::Weights;

    fn previous(theme_id: &str, accent: &str) -> VariantProfile {
        VariantProfile {
            seed: 1,
            key: "2024-01-01".to_string(),
            theme_id: theme_id.to_string(),
            layout_id: "poster".to_string(),
            pattern_id: "grid".to_string(),
            mockup_id: "list".to_string(),
            signature: String::new(),
            accent: accent.to_string(),
            weights: Weights::default(),
            parts: Vec::new(),
            hero_mode: HeroMode::Poster,
        }
    }

    #[test]
    fn test_theme_is_deterministic() {
        let a = select_theme(&mut SeededRng::new(99), None, None);
        let b = select_theme(&mut SeededRng::new(99), None, None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_consumes_four_draws() {
        let mut rng = SeededRng::new(1234);
        select_theme(&mut rng, Some(&previous("nebula", "#38bdf8")), None);
        let mut reference = SeededRng::new(1234);
        for _ in 0..4 {
            reference.next_f64();
        }
        assert_eq!(rng.next_f64(), reference.next_f64());
    }

    #[test]
    fn test_previous_theme_is_avoided() {
        for seed in 1..200 {
            let theme = select_theme(
                &mut SeededRng::new(seed),
                Some(&previous("ember", "#fb7185")),
                Some("forest"),
            );
            assert_ne!(theme.id, "ember", "seed {seed}");
        }
    }

    #[test]
    fn test_accent_differs_from_previous() {
        for seed in 1..200 {
            let prev = previous("solstice", "#38bdf8");
            let theme = select_theme(&mut SeededRng::new(seed), Some(&prev), None);
            assert!(color_delta_e(theme.accent, "#38bdf8") >= ACCENT_MIN_DELTA, "seed {seed}");
        }
    }

    #[test]
    fn test_highlight_is_not_accent() {
        for seed in 1..100 {
            let theme = select_theme(&mut SeededRng::new(seed), None, None);
            assert_ne!(theme.highlight, theme.accent);
        }
    }

    #[test]
    fn test_background_ends_with_base() {
        let theme = select_theme(&mut SeededRng::new(5), None, None);
        assert!(theme.background.ends_with(theme.base));
        assert!(theme.background.starts_with("radial-gradient("));
        assert!(theme.accent_soft.ends_with("0.22)"));
        assert!(theme.accent_strong.ends_with("0.36)"));
        assert!(theme.highlight_soft.ends_with("0.2)"));
    }

    #[test]
    fn test_palette_is_unique_hex() {
        let theme = select_theme(&mut SeededRng::new(77), None, None);
        let palette = theme.palette();
        assert!(!palette.is_empty() && palette.len() <= 6);
        let mut sorted = palette.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), palette.len());
    }
}
