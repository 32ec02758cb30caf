//! Weekly budget. Content draws: fill and amount per category (4 rows), then
//! the pie slice.

use crate::pools::copy::BUDGET_CATEGORIES;
use crate::rng::SeededRng;
use crate::select::Theme;

use super::{format_brl, Mockup, MockupBuilder};

const CSS: &str = r#"
      .budget { display: grid; grid-template-columns: 1fr auto; gap: 18px; align-items: center; }
      .budget__rows { display: grid; gap: 10px; }
      .budget__row { display: grid; gap: 4px; font-size: 0.84rem; }
      .budget__meta { display: flex; justify-content: space-between; }
      .budget__bar { height: 6px; border-radius: 999px; background: var(--surface-soft); overflow: hidden; }
      .budget__bar span { display: block; height: 100%; background: var(--accent); }
      .budget__pie { width: 96px; height: 96px; border-radius: 50%; }
      .budget__total { font-size: 0.8rem; color: var(--muted); text-align: center; }
"#;

pub(super) fn build(rng: &mut SeededRng, theme: &Theme) -> Mockup {
    let rows: Vec<(&str, u32, u32)> = BUDGET_CATEGORIES
        .iter()
        .map(|category| {
            let fill = rng.range_inclusive(35, 90);
            let amount = rng.range_inclusive(800, 3000);
            (*category, fill, amount)
        })
        .collect();
    let slice = rng.range_inclusive(28, 80);
    let projected: u32 = rows.iter().map(|r| r.2).sum();

    let rows_html: String = rows
        .iter()
        .map(|(category, fill, amount)| {
            format!(
                r#"<div class="budget__row"><div class="budget__meta"><span>{category}</span><strong>{}</strong></div><div class="budget__bar"><span style="width: {fill}%"></span></div></div>"#,
                format_brl(*amount)
            )
        })
        .collect();

    let mut builder = MockupBuilder::new("budget", CSS);
    builder.push_html(&format!(
        r#"<div class="mockup__head"><h3 class="mockup__title">Semana atual</h3><span class="mockup__tag">{slice}% gasto</span></div>
        <div class="budget">
          <div class="budget__rows">{rows_html}</div>
          <div>
            <div class="budget__pie" style="background: conic-gradient({accent} 0 {slice}%, {soft} {slice}% 100%)"></div>
            <div class="budget__total">Projeção {total}</div>
          </div>
        </div>"#,
        accent = theme.accent,
        soft = theme.highlight_soft,
        total = format_brl(projected),
    ));
    builder.swatch(rng, theme);
    builder.stat_card(rng, theme);
    builder.finish(format!("budget:{slice}:{}/{}", rows[0].1, rows[1].1))
}
