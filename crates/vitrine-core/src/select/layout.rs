use crate::pools::{LayoutVariant, LAYOUT_VARIANTS};
use crate::rng::SeededRng;

use super::{narrow, weighted_pick};

/// Weighted layout pick. One draw.
///
/// `previous_id` is yesterday's layout, `avoid_id` the one a collision retry
/// just rejected; each is excluded while more than one candidate remains.
pub fn select_layout(
    rng: &mut SeededRng,
    previous_id: Option<&str>,
    avoid_id: Option<&str>,
) -> &'static LayoutVariant {
    let candidates = narrow(LAYOUT_VARIANTS, |l| l.id, &[previous_id, avoid_id]);
    weighted_pick(rng, &candidates, |l| l.weight).unwrap_or(&LAYOUT_VARIANTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_avoids_previous_and_rejected() {
        for seed in 1..300 {
            let layout = select_layout(&mut SeededRng::new(seed), Some("poster"), Some("tower"));
            assert_ne!(layout.id, "poster");
            assert_ne!(layout.id, "tower");
        }
    }

    #[test]
    fn test_every_layout_reachable() {
        let mut seen = std::collections::HashSet::new();
        let mut rng = SeededRng::new(1);
        for _ in 0..500 {
            seen.insert(select_layout(&mut rng, None, None).id);
        }
        assert_eq!(seen.len(), LAYOUT_VARIANTS.len());
    }
}
