//! Priority list. Content draws: 5 labels (without replacement), then a
//! fill and a state draw per row.

use crate::idea::Idea;
use crate::pools::copy::LIST_LABELS;
use crate::render::escape_html;
use crate::rng::SeededRng;
use crate::select::Theme;

use super::{Mockup, MockupBuilder};

const ROWS: usize = 5;

const CSS: &str = r#"
      .tasks { list-style: none; margin: 0; padding: 0; display: grid; gap: 10px; }
      .task { display: grid; grid-template-columns: 18px 1fr auto; gap: 10px; align-items: center; font-size: 0.88rem; }
      .task__dot { width: 12px; height: 12px; border-radius: 50%; border: 2px solid var(--border); }
      .task--complete .task__dot { background: var(--success); border-color: var(--success); }
      .task--progress .task__dot { border-color: var(--accent); }
      .task--complete .task__label { text-decoration: line-through; color: var(--muted); }
      .task__bar { grid-column: 2 / 4; height: 4px; border-radius: 999px; background: var(--surface-soft); overflow: hidden; }
      .task__bar span { display: block; height: 100%; background: var(--accent); }
"#;

fn state_for(value: f64) -> &'static str {
    if value > 0.66 {
        "complete"
    } else if value > 0.30 {
        "progress"
    } else {
        "idle"
    }
}

pub(super) fn build(rng: &mut SeededRng, theme: &Theme, idea: &Idea) -> Mockup {
    let tag = if idea.slug.contains("deploy") {
        "Deploy"
    } else {
        "Prioridades"
    };
    let labels = rng.pick_many(LIST_LABELS, ROWS);
    let rows: Vec<(&str, u32, &str)> = labels
        .iter()
        .map(|label| {
            let fill = rng.range_inclusive(30, 90);
            let state = state_for(rng.next_f64());
            (*label, fill, state)
        })
        .collect();

    let items: String = rows
        .iter()
        .map(|(label, fill, state)| {
            format!(
                r#"<li class="task task--{state}"><span class="task__dot"></span><span class="task__label">{}</span><span>{fill}%</span><div class="task__bar"><span style="width: {fill}%"></span></div></li>"#,
                escape_html(label)
            )
        })
        .collect();

    let mut builder = MockupBuilder::new("list", CSS);
    builder.push_html(&format!(
        r#"<div class="mockup__head"><h3 class="mockup__title">Hoje</h3><span class="mockup__tag">{tag}</span></div>
        <ul class="tasks">{items}</ul>"#
    ));
    builder.swatch(rng, theme);
    builder.stat_card(rng, theme);

    let first_labels: Vec<&str> = rows.iter().take(2).map(|r| r.0).collect();
    let first_fills: Vec<String> = rows.iter().take(2).map(|r| r.1.to_string()).collect();
    builder.finish(format!(
        "list:{tag}:{}:{}",
        first_labels.join("/"),
        first_fills.join("/")
    ))
}
