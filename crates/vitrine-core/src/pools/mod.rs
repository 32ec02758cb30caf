//! Static catalogs
//!
//! Every table here is immutable configuration shared by all generations.

pub mod copy;
pub mod layouts;
pub mod patterns;
pub mod themes;

pub use layouts::{HeroMode, LayoutVariant, LAYOUT_VARIANTS};
pub use patterns::{PatternVariant, PATTERN_VARIANTS};
pub use themes::{BackgroundLayer, FontStack, LayerTone, ThemePreset, FONT_STACKS, THEME_PRESETS};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_hex_color;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = THEME_PRESETS.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), THEME_PRESETS.len());

        let mut ids: Vec<_> = LAYOUT_VARIANTS.iter().map(|l| l.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), LAYOUT_VARIANTS.len());

        let mut ids: Vec<_> = PATTERN_VARIANTS.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PATTERN_VARIANTS.len());
    }

    #[test]
    fn test_preset_colors_are_hex() {
        for preset in THEME_PRESETS {
            for color in preset.accents.iter().chain(preset.highlights) {
                assert!(is_hex_color(color), "{}: {}", preset.id, color);
            }
            assert!(is_hex_color(preset.base), "{}", preset.id);
            assert!(is_hex_color(preset.success), "{}", preset.id);
            assert!(is_hex_color(preset.warning), "{}", preset.id);
            assert!(preset.weight > 0.0);
        }
    }

    #[test]
    fn test_layout_set_matches_catalog() {
        let ids: Vec<_> = LAYOUT_VARIANTS.iter().map(|l| l.id).collect();
        assert_eq!(
            ids,
            ["focus-center", "sidekick", "tower", "gallery", "stacked", "poster"]
        );
    }
}
