use crate::pools::{PatternVariant, PATTERN_VARIANTS};
use crate::rng::SeededRng;

use super::{narrow, weighted_pick, Theme};

/// A chosen pattern rendered against a theme
#[derive(Debug, Clone, PartialEq)]
pub struct PatternChoice {
    pub id: &'static str,
    pub css: String,
}

/// Weighted pattern pick with the same exclusions as layouts. One draw.
pub fn select_pattern(
    rng: &mut SeededRng,
    theme: &Theme,
    previous_id: Option<&str>,
    avoid_id: Option<&str>,
) -> PatternChoice {
    let candidates = narrow(PATTERN_VARIANTS, |p| p.id, &[previous_id, avoid_id]);
    let variant: &PatternVariant =
        weighted_pick(rng, &candidates, |p| p.weight).unwrap_or(&PATTERN_VARIANTS[0]);
    PatternChoice {
        id: variant.id,
        css: (variant.build)(theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::select_theme;

    #[test]
    fn test_pattern_renders_for_theme() {
        let mut rng = SeededRng::new(31);
        let theme = select_theme(&mut rng, None, None);
        let choice = select_pattern(&mut rng, &theme, Some("grid"), None);
        assert_ne!(choice.id, "grid");
        assert!(choice.css.contains("gradient("));
    }
}
