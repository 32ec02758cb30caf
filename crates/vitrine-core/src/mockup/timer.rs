//! Focus timer. Content draws: minutes, seconds, progress, cycle, then one
//! weight per segment (4).

use crate::pools::copy::TIMER_SEGMENTS;
use crate::render::escape_html;
use crate::rng::SeededRng;
use crate::select::Theme;

use super::{Mockup, MockupBuilder};

const CSS: &str = r#"
      .timer { display: grid; grid-template-columns: auto 1fr; gap: 20px; align-items: center; }
      .timer__ring { width: 132px; height: 132px; border-radius: 50%; display: grid; place-items: center; }
      .timer__inner { width: 104px; height: 104px; border-radius: 50%; background: var(--panel); display: grid; place-items: center; text-align: center; }
      .timer__time { font: 700 1.6rem/1 var(--font-heading); font-variant-numeric: tabular-nums; }
      .timer__cycle { font-size: 0.72rem; color: var(--muted); }
      .timer__segments { display: flex; height: 10px; border-radius: 999px; overflow: hidden; }
      .timer__legend { display: flex; flex-wrap: wrap; gap: 10px; font-size: 0.74rem; color: var(--muted); }
      .timer__toggle { justify-self: start; padding: 8px 16px; border-radius: 999px; border: 1px solid var(--border); background: var(--accent-soft); color: var(--text); cursor: pointer; }
"#;

const SCRIPT: &str = r#"(function(){
  const btn = document.querySelector('[data-timer-toggle]');
  const out = document.querySelector('[data-timer-display]');
  if (!btn || !out) return;
  let left = parseInt(out.dataset.seconds, 10) || 0;
  let handle = null;
  const stop = () => { clearInterval(handle); handle = null; btn.textContent = 'Iniciar'; };
  btn.addEventListener('click', () => {
    if (handle) { stop(); return; }
    btn.textContent = 'Pausar';
    handle = setInterval(() => {
      left = Math.max(0, left - 1);
      out.textContent = String(Math.floor(left / 60)).padStart(2, '0') + ':' + String(left % 60).padStart(2, '0');
      if (!left) stop();
    }, 1000);
  });
}());"#;

pub(super) fn build(rng: &mut SeededRng, theme: &Theme) -> Mockup {
    let minutes = rng.range_inclusive(15, 50);
    let seconds = rng.range_inclusive(0, 59);
    let progress = rng.range_inclusive(12, 92);
    let cycle = rng.range_inclusive(1, 6);
    let weights: Vec<u32> = TIMER_SEGMENTS
        .iter()
        .map(|_| rng.range_inclusive(10, 40))
        .collect();
    let total: u32 = weights.iter().sum::<u32>().max(1);

    let colors = [theme.accent, theme.highlight, theme.success, theme.warning];
    let segments: String = weights
        .iter()
        .zip(colors)
        .map(|(w, color)| {
            format!(
                r#"<span style="flex: {w} 1 0; background: {color}"></span>"#
            )
        })
        .collect();
    let legend: String = TIMER_SEGMENTS
        .iter()
        .zip(&weights)
        .map(|(label, w)| {
            format!(
                "<span>{} · {}%</span>",
                escape_html(label),
                w * 100 / total
            )
        })
        .collect();

    let mut builder = MockupBuilder::new("timer", CSS);
    builder.push_html(&format!(
        r#"<div class="mockup__head"><h3 class="mockup__title">Sessão de foco</h3><span class="mockup__tag">Ciclo {cycle}</span></div>
        <div class="timer">
          <div class="timer__ring" style="background: conic-gradient({accent} {progress}%, {track} 0)">
            <div class="timer__inner">
              <div>
                <div class="timer__time" data-timer-display data-seconds="{total_seconds}">{minutes:02}:{seconds:02}</div>
                <div class="timer__cycle">{progress}% concluído</div>
              </div>
            </div>
          </div>
          <button class="timer__toggle" type="button" data-timer-toggle>Iniciar</button>
        </div>
        <div class="timer__segments">{segments}</div>
        <div class="timer__legend">{legend}</div>"#,
        accent = theme.accent,
        track = theme.accent_soft,
        total_seconds = minutes * 60 + seconds,
    ));
    builder.script(SCRIPT);
    builder.swatch(rng, theme);
    builder.stat_card(rng, theme);
    builder.finish(format!("timer:{progress}:{cycle}"))
}
