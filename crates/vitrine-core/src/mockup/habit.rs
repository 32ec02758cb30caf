//! Habit grid. Content draws: 28 cells (row-major, 4 weeks of 7 days), then
//! streak, then the target gap.

use crate::pools::copy::WEEKDAYS;
use crate::rng::SeededRng;
use crate::select::Theme;

use super::{Mockup, MockupBuilder};

const WEEKS: usize = 4;

const CSS: &str = r#"
      .habit { display: grid; grid-template-columns: repeat(7, 1fr); gap: 6px; }
      .habit__day { text-align: center; font-size: 0.7rem; color: var(--muted); }
      .habit__cell { aspect-ratio: 1; border-radius: 7px; background: var(--surface-soft); }
      .habit__cell--strong { background: var(--accent); }
      .habit__cell--mid { background: var(--accent-soft); }
      .habit__foot { display: flex; justify-content: space-between; font-size: 0.82rem; color: var(--muted); }
      .habit__foot strong { color: var(--text); }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Strong,
    Mid,
    Off,
}

impl Cell {
    fn classify(value: f64) -> Self {
        if value > 0.64 {
            Cell::Strong
        } else if value > 0.30 {
            Cell::Mid
        } else {
            Cell::Off
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Cell::Strong => "strong",
            Cell::Mid => "mid",
            Cell::Off => "off",
        }
    }
}

pub(super) fn build(rng: &mut SeededRng, theme: &Theme) -> Mockup {
    let cells: Vec<Cell> = (0..WEEKS * WEEKDAYS.len())
        .map(|_| Cell::classify(rng.next_f64()))
        .collect();
    let streak = rng.range_inclusive(3, 16);
    let target = streak + rng.range_inclusive(2, 6);

    let header: String = WEEKDAYS
        .iter()
        .map(|d| format!(r#"<span class="habit__day">{d}</span>"#))
        .collect();
    let grid: String = cells
        .iter()
        .map(|c| format!(r#"<span class="habit__cell habit__cell--{}"></span>"#, c.as_str()))
        .collect();

    let mut builder = MockupBuilder::new("habit", CSS);
    builder.push_html(&format!(
        r#"<div class="mockup__head"><h3 class="mockup__title">Últimas 4 semanas</h3><span class="mockup__tag">{streak} dias seguidos</span></div>
        <div class="habit">{header}{grid}</div>
        <div class="habit__foot"><span>Sequência atual <strong>{streak}</strong></span><span>Meta <strong>{target}</strong></span></div>"#
    ));
    builder.swatch(rng, theme);
    builder.stat_card(rng, theme);

    let head: Vec<&str> = cells.iter().take(6).map(Cell::as_str).collect();
    builder.finish(format!("habit:{streak}:{target}:{}", head.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::select_theme;

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(Cell::classify(0.65), Cell::Strong);
        assert_eq!(Cell::classify(0.64), Cell::Mid);
        assert_eq!(Cell::classify(0.31), Cell::Mid);
        assert_eq!(Cell::classify(0.30), Cell::Off);
    }

    #[test]
    fn test_habit_grid_shape_and_target() {
        let mut rng = SeededRng::new(3);
        let theme = select_theme(&mut rng, None, None);
        let mockup = build(&mut rng, &theme);
        assert_eq!(mockup.html.matches("habit__cell habit__cell--").count(), 28);

        let parts: Vec<&str> = mockup.signature.split(':').collect();
        let streak: u32 = parts[1].parse().unwrap();
        let target: u32 = parts[2].parse().unwrap();
        assert!((3..=16).contains(&streak));
        assert!(target >= streak + 2 && target <= streak + 6);
        assert_eq!(parts[3].split(',').count(), 6);
    }
}
