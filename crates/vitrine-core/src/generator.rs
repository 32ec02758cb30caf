//! Seeded procedural pipeline
//!
//! One shared [`SeededRng`] stream, seeded from the day key, is consumed in
//! this exact order:
//!
//! 1. theme (4 draws, see [`select_theme`]);
//! 2. feature top-up (one draw per attempt until four features exist);
//! 3. layout (1 draw);
//! 4. pattern (1 draw);
//! 5. mockup (builder-specific, see [`crate::mockup`]);
//! 6. per collision retry: theme on the 3rd retry, then layout, pattern and
//!    mockup again;
//! 7. motto (1 draw).
//!
//! Reordering any step changes every artifact produced for a given key.

use std::collections::HashSet;

use crate::cache::MAX_RECENT_VARIANTS;
use crate::idea::{seed_from_key, Idea};
use crate::mockup::{build_app_mockup, Mockup};
use crate::pools::copy::{FOCUS_POINTS, POWER_LINES, TRAINING_RITUALS};
use crate::pools::LayoutVariant;
use crate::profile::{composite_signature, VariantProfile, Weights};
use crate::render::{render_shell, ShellInput};
use crate::rng::SeededRng;
use crate::select::{select_layout, select_pattern, select_theme, PatternChoice, Theme};

/// Retries before a colliding combination is accepted
pub const MAX_COLLISION_RETRIES: u32 = 6;
/// The retry on which the theme is re-rolled too
const THEME_REROLL_RETRY: u32 = 3;
/// Features carried by every preview
const FEATURE_COUNT: usize = 4;

/// Output of one procedural generation
#[derive(Debug, Clone, PartialEq)]
pub struct ProceduralPreview {
    pub html: String,
    pub profile: VariantProfile,
    /// Collision retries performed (at most [`MAX_COLLISION_RETRIES`])
    pub retries: u32,
}

/// One (theme, layout, pattern, mockup) combination
#[derive(Debug, Clone)]
struct Variants {
    theme: Theme,
    layout: &'static LayoutVariant,
    pattern: PatternChoice,
    mockup: Mockup,
}

impl Variants {
    fn signature(&self) -> String {
        composite_signature(
            self.theme.id,
            self.layout.id,
            self.pattern.id,
            &self.mockup.signature,
        )
    }
}

/// Generate the preview for `key` from `idea`, avoiding the combinations in
/// `history` (most recent last). Pure: same inputs, same bytes.
pub fn generate_procedural_preview(
    key: &str,
    idea: &Idea,
    history: &[VariantProfile],
) -> ProceduralPreview {
    let seed = seed_from_key(key);
    let mut rng = SeededRng::new(seed);
    let previous = history.last();

    let recent: HashSet<&str> = history
        .iter()
        .rev()
        .take(MAX_RECENT_VARIANTS)
        .map(|p| p.signature.as_str())
        .collect();

    let theme = select_theme(&mut rng, previous, None);
    let features = ensure_feature_list(&idea.features, &mut rng);
    let (variants, retries) = resolve_variants(&mut rng, theme, idea, previous, |signature| {
        recent.contains(signature)
    });
    let motto = rng.pick(POWER_LINES).copied().unwrap_or(POWER_LINES[0]);

    let Variants {
        theme,
        layout,
        pattern,
        mockup,
    } = variants;

    let profile = VariantProfile {
        seed,
        key: key.to_string(),
        theme_id: theme.id.to_string(),
        layout_id: layout.id.to_string(),
        pattern_id: pattern.id.to_string(),
        mockup_id: mockup.id.to_string(),
        signature: composite_signature(theme.id, layout.id, pattern.id, &mockup.signature),
        accent: theme.accent.to_string(),
        weights: Weights::default(),
        parts: mockup.parts.clone(),
        hero_mode: layout.hero_mode,
    };

    let shown = &features[..layout.feature_count.min(features.len())];
    let html = render_shell(&ShellInput {
        key,
        idea,
        theme: &theme,
        features: shown,
        motto,
        pattern_css: &pattern.css,
        profile: &profile,
        typography: &theme.font,
        layout_id: layout.id,
        hero_mode: layout.hero_mode,
        layout_css: layout.css,
        mockup: &mockup,
    });

    ProceduralPreview {
        html,
        profile,
        retries,
    }
}

/// Pick layout, pattern and mockup, re-rolling while `is_taken` reports the
/// composite signature as recently used. Bounded by [`MAX_COLLISION_RETRIES`].
fn resolve_variants(
    rng: &mut SeededRng,
    theme: Theme,
    idea: &Idea,
    previous: Option<&VariantProfile>,
    is_taken: impl Fn(&str) -> bool,
) -> (Variants, u32) {
    let previous_layout = previous.map(|p| p.layout_id.as_str());
    let previous_pattern = previous.map(|p| p.pattern_id.as_str());

    let layout = select_layout(rng, previous_layout, None);
    let pattern = select_pattern(rng, &theme, previous_pattern, None);
    let mockup = build_app_mockup(rng, &theme, idea);
    let mut variants = Variants {
        theme,
        layout,
        pattern,
        mockup,
    };

    let mut retries = 0;
    while retries < MAX_COLLISION_RETRIES && is_taken(&variants.signature()) {
        retries += 1;
        if retries == THEME_REROLL_RETRY {
            variants.theme = select_theme(rng, previous, Some(variants.theme.id));
        }
        variants.layout = select_layout(rng, previous_layout, Some(variants.layout.id));
        variants.pattern =
            select_pattern(rng, &variants.theme, previous_pattern, Some(variants.pattern.id));
        variants.mockup = build_app_mockup(rng, &variants.theme, idea);
    }

    (variants, retries)
}

/// Keep the idea's features (non-empty, unique) and top up to four from the
/// copy pools. One draw per top-up attempt.
pub fn ensure_feature_list(features: &[String], rng: &mut SeededRng) -> Vec<String> {
    let mut list: Vec<String> = Vec::with_capacity(FEATURE_COUNT);
    for feature in features {
        let feature = feature.trim();
        if !feature.is_empty() && !list.iter().any(|f| f == feature) {
            list.push(feature.to_string());
        }
    }

    let pool: Vec<&str> = TRAINING_RITUALS
        .iter()
        .chain(FOCUS_POINTS)
        .copied()
        .collect();
    while list.len() < FEATURE_COUNT {
        let Some(candidate) = rng.pick(&pool) else {
            break;
        };
        if !list.iter().any(|f| f == candidate) {
            list.push(candidate.to_string());
        }
    }

    list.truncate(FEATURE_COUNT);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idea::generate_idea_locally;

    #[test]
    fn test_generation_is_deterministic() {
        let idea = generate_idea_locally("2024-06-01");
        let a = generate_procedural_preview("2024-06-01", &idea, &[]);
        let b = generate_procedural_preview("2024-06-01", &idea, &[]);
        assert_eq!(a.html, b.html);
        assert_eq!(a.profile, b.profile);
    }

    #[test]
    fn test_different_days_differ() {
        let a = generate_procedural_preview("2024-06-01", &generate_idea_locally("2024-06-01"), &[]);
        let b = generate_procedural_preview("2024-06-02", &generate_idea_locally("2024-06-02"), &[]);
        assert_ne!(a.html, b.html);
    }

    #[test]
    fn test_profile_matches_output() {
        let idea = generate_idea_locally("2024-07-04");
        let preview = generate_procedural_preview("2024-07-04", &idea, &[]);
        let profile = &preview.profile;
        assert_eq!(profile.seed, seed_from_key("2024-07-04"));
        assert_eq!(profile.key, "2024-07-04");
        assert!(profile.signature.starts_with(&format!(
            "{}|{}|{}|",
            profile.theme_id, profile.layout_id, profile.pattern_id
        )));
        assert!(preview.html.contains(&format!("data-layout=\"{}\"", profile.layout_id)));
        assert_eq!(preview.retries, 0);
    }

    #[test]
    fn test_untrusted_title_is_escaped() {
        let mut idea = generate_idea_locally("2024-01-01");
        idea.title = "<img src=x onerror=alert(1)>".to_string();
        let preview = generate_procedural_preview("2024-01-01", &idea, &[]);
        assert!(preview.html.contains("&lt;img"));
        assert!(!preview.html.contains("<img"));
    }

    #[test]
    fn test_repeat_of_yesterday_is_avoided() {
        let idea = generate_idea_locally("2024-03-10");
        let first = generate_procedural_preview("2024-03-10", &idea, &[]);
        let second = generate_procedural_preview("2024-03-10", &idea, &[first.profile.clone()]);
        assert_ne!(second.profile.signature, first.profile.signature);
        assert_ne!(second.profile.theme_id, first.profile.theme_id);
    }

    #[test]
    fn test_retry_loop_is_bounded() {
        let idea = generate_idea_locally("2024-03-10");
        let mut rng = SeededRng::new(seed_from_key("2024-03-10"));
        let theme = select_theme(&mut rng, None, None);
        let (variants, retries) = resolve_variants(&mut rng, theme, &idea, None, |_| true);
        assert_eq!(retries, MAX_COLLISION_RETRIES);
        assert!(!variants.signature().is_empty());
    }

    #[test]
    fn test_retry_stops_at_first_free_signature() {
        let idea = generate_idea_locally("2024-03-10");
        let mut rng = SeededRng::new(seed_from_key("2024-03-10"));
        let theme = select_theme(&mut rng, None, None);
        let mut scratch = rng.clone();
        let (first, _) = resolve_variants(&mut scratch, theme.clone(), &idea, None, |_| false);
        let taken = first.signature();

        let (variants, retries) =
            resolve_variants(&mut rng, theme, &idea, None, |s| s == taken);
        assert_eq!(retries, 1);
        assert_ne!(variants.signature(), taken);
    }

    #[test]
    fn test_theme_rerolls_only_on_third_retry() {
        let idea = generate_idea_locally("2024-03-10");
        let mut rng = SeededRng::new(seed_from_key("2024-03-10"));
        let theme = select_theme(&mut rng, None, None);

        for (taken_count, theme_changes) in [(1, false), (2, false), (3, true), (4, true)] {
            let calls = std::cell::Cell::new(0u32);
            let is_taken = |_: &str| {
                calls.set(calls.get() + 1);
                calls.get() <= taken_count
            };
            let (variants, retries) =
                resolve_variants(&mut rng.clone(), theme.clone(), &idea, None, is_taken);
            assert_eq!(retries, taken_count);
            assert_eq!(variants.theme.id != theme.id, theme_changes, "retries={retries}");
        }
    }

    #[test]
    fn test_ensure_feature_list() {
        let mut rng = SeededRng::new(5);
        let given = vec![
            "A".to_string(),
            " ".to_string(),
            "A".to_string(),
            "B".to_string(),
        ];
        let list = ensure_feature_list(&given, &mut rng);
        assert_eq!(list.len(), 4);
        assert_eq!(&list[..2], &["A".to_string(), "B".to_string()]);

        let many: Vec<String> = (0..6).map(|i| format!("f{i}")).collect();
        assert_eq!(ensure_feature_list(&many, &mut rng).len(), 4);
    }
}
