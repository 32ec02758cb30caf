//! Flip cards. Content draws: word, hint. No stat card.

use crate::pools::copy::{FLASH_HINTS, FLASH_WORDS};
use crate::render::escape_html;
use crate::rng::SeededRng;
use crate::select::Theme;

use super::{Mockup, MockupBuilder};

const CSS: &str = r#"
      .flash { perspective: 900px; cursor: pointer; }
      .flash__card { position: relative; min-height: 150px; transition: transform 0.5s ease; transform-style: preserve-3d; }
      .flash.is-flipped .flash__card { transform: rotateY(180deg); }
      .flash__face { position: absolute; inset: 0; display: grid; place-items: center; border-radius: 16px; backface-visibility: hidden; background: var(--surface); border: 1px solid var(--border); font: 700 1.5rem/1.2 var(--font-heading); }
      .flash__face--back { transform: rotateY(180deg); background: var(--accent-soft); font-size: 1rem; font-weight: 500; }
      .flash__hint { font-size: 0.78rem; color: var(--muted); }
"#;

const SCRIPT: &str = r#"(function(){
  const card = document.querySelector('[data-flash]');
  if (!card) return;
  card.addEventListener('click', () => card.classList.toggle('is-flipped'));
}());"#;

pub(super) fn build(rng: &mut SeededRng, theme: &Theme) -> Mockup {
    let word = rng.pick(FLASH_WORDS).copied().unwrap_or("grep");
    let hint = rng.pick(FLASH_HINTS).copied().unwrap_or("busca por padrão");

    let mut builder = MockupBuilder::new("flashcards", CSS);
    builder.push_html(&format!(
        r#"<div class="mockup__head"><h3 class="mockup__title">Revisão rápida</h3><span class="mockup__tag">1 / 12</span></div>
        <div class="flash" data-flash>
          <div class="flash__card">
            <div class="flash__face">{word}</div>
            <div class="flash__face flash__face--back">{hint}</div>
          </div>
        </div>
        <p class="flash__hint">Clique para virar · dica: {hint}</p>"#,
        word = escape_html(word),
        hint = escape_html(hint),
    ));
    builder.script(SCRIPT);
    builder.swatch(rng, theme);
    builder.finish(format!("flashcards:{word}:{hint}"))
}
