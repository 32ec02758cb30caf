//! Variant selection
//!
//! All selectors draw from the caller's shared [`SeededRng`] stream. The
//! number of draws each one consumes is fixed, see the function docs.

mod layout;
mod pattern;
mod theme;

pub use layout::select_layout;
pub use pattern::{select_pattern, PatternChoice};
pub use theme::{select_theme, Theme};

use crate::rng::SeededRng;

/// Drop each excluded id from the candidates while more than one remains
fn narrow<'a, T>(
    items: &'a [T],
    id_of: impl Fn(&T) -> &str,
    exclusions: &[Option<&str>],
) -> Vec<&'a T> {
    let mut candidates: Vec<&T> = items.iter().collect();
    for excluded in exclusions.iter().flatten() {
        if candidates.len() <= 1 {
            break;
        }
        let filtered: Vec<&T> = candidates
            .iter()
            .copied()
            .filter(|item| id_of(*item) != *excluded)
            .collect();
        if !filtered.is_empty() {
            candidates = filtered;
        }
    }
    candidates
}

/// One weighted draw over the candidates
fn weighted_pick<'a, T>(
    rng: &mut SeededRng,
    candidates: &[&'a T],
    weight_of: impl Fn(&T) -> f64,
) -> Option<&'a T> {
    let weights: Vec<f64> = candidates.iter().map(|c| weight_of(*c)).collect();
    rng.weighted_index(&weights)
        .and_then(|idx| candidates.get(idx).copied())
}
