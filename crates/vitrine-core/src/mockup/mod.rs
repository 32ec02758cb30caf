//! Mockup builders
//!
//! A mockup is the visual widget that stands in for the app of the day. The
//! builder is chosen by keyword from the idea's slug and title; each builder
//! consumes the shared PRNG stream in a fixed order:
//!
//! 1. its own content draws (documented per builder);
//! 2. the palette swatch, one draw per picked color (up to 4);
//! 3. the mini stat card, 4 draws (all builders except flashcards and document).

mod budget;
mod document;
mod flashcards;
mod habit;
mod list;
mod timer;

use crate::color::hex_to_rgba;
use crate::idea::Idea;
use crate::pools::copy::STAT_LABELS;
use crate::render::escape_html;
use crate::rng::SeededRng;
use crate::select::Theme;

/// A rendered mockup fragment
#[derive(Debug, Clone, PartialEq)]
pub struct Mockup {
    pub id: &'static str,
    /// Builder-specific fingerprint of the randomized choices
    pub signature: String,
    pub html: String,
    pub css: String,
    pub parts: Vec<String>,
    pub script: Option<String>,
}

/// Closed set of mockup archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockupKind {
    Timer,
    Habit,
    List,
    Budget,
    Flashcards,
    Document,
}

impl MockupKind {
    pub fn id(&self) -> &'static str {
        match self {
            MockupKind::Timer => "timer",
            MockupKind::Habit => "habit",
            MockupKind::List => "list",
            MockupKind::Budget => "budget",
            MockupKind::Flashcards => "flashcards",
            MockupKind::Document => "document",
        }
    }

    pub fn build(self, rng: &mut SeededRng, theme: &Theme, idea: &Idea) -> Mockup {
        match self {
            MockupKind::Timer => timer::build(rng, theme),
            MockupKind::Habit => habit::build(rng, theme),
            MockupKind::List => list::build(rng, theme, idea),
            MockupKind::Budget => budget::build(rng, theme),
            MockupKind::Flashcards => flashcards::build(rng, theme),
            MockupKind::Document => document::build(rng, theme),
        }
    }
}

/// Ordered keyword table; the first entry with a matching keyword wins
static MOCKUP_RULES: &[(&[&str], MockupKind)] = &[
    (&["timer", "pomodoro", "cronometro"], MockupKind::Timer),
    (&["habit", "streak"], MockupKind::Habit),
    (&["budget", "finance"], MockupKind::Budget),
    (&["flashcard", "card"], MockupKind::Flashcards),
    (&["readme", "document"], MockupKind::Document),
    (
        &["todo", "tarefas", "task", "checklist", "deploy"],
        MockupKind::List,
    ),
];

/// Archetype for an idea, defaulting to the list mockup
pub fn mockup_kind_for(idea: &Idea) -> MockupKind {
    let haystack = format!("{} {}", idea.slug, idea.title).to_lowercase();
    MOCKUP_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(_, kind)| *kind)
        .unwrap_or(MockupKind::List)
}

/// Pick the archetype for `idea` and build it from the shared stream
pub fn build_app_mockup(rng: &mut SeededRng, theme: &Theme, idea: &Idea) -> Mockup {
    mockup_kind_for(idea).build(rng, theme, idea)
}

/// Styles shared by every mockup (frame, swatch, stat card)
const SHARED_CSS: &str = r#"
      .mockup { display: flex; flex-direction: column; gap: 18px; padding: 22px; border-radius: 20px; background: var(--panel); border: 1px solid var(--border); box-shadow: var(--shadow); }
      .mockup__head { display: flex; justify-content: space-between; align-items: center; gap: 12px; }
      .mockup__title { margin: 0; font-size: 0.95rem; letter-spacing: 0.04em; text-transform: uppercase; color: var(--muted); }
      .mockup__tag { padding: 4px 10px; border-radius: 999px; font-size: 0.72rem; background: var(--accent-soft); color: var(--text); }
      .swatch { display: flex; gap: 8px; }
      .swatch__chip { width: 28px; height: 28px; border-radius: 9px; border: 1px solid var(--border); }
      .stat { display: grid; gap: 6px; padding: 12px 14px; border-radius: 14px; background: var(--surface-soft); }
      .stat__row { display: flex; justify-content: space-between; font-size: 0.82rem; }
      .stat__value { font-weight: 700; }
      .stat__bar { height: 6px; border-radius: 999px; background: var(--border); overflow: hidden; }
      .stat__fill { height: 100%; border-radius: inherit; }
"#;

/// Accumulates the pieces of one mockup
pub(crate) struct MockupBuilder {
    id: &'static str,
    html: String,
    css: String,
    parts: Vec<String>,
    script: Option<String>,
}

impl MockupBuilder {
    pub(crate) fn new(id: &'static str, css: &str) -> Self {
        let mut all_css = String::with_capacity(SHARED_CSS.len() + css.len());
        all_css.push_str(SHARED_CSS);
        all_css.push_str(css);
        Self {
            id,
            html: String::new(),
            css: all_css,
            parts: vec![id.to_string()],
            script: None,
        }
    }

    pub(crate) fn push_html(&mut self, fragment: &str) {
        self.html.push_str(fragment);
    }

    pub(crate) fn script(&mut self, script: &str) {
        self.script = Some(script.to_string());
    }

    /// Palette swatch. One draw per chip.
    pub(crate) fn swatch(&mut self, rng: &mut SeededRng, theme: &Theme) {
        let palette = theme.palette();
        let chips = rng.pick_many(&palette, 4);
        let html: String = chips
            .iter()
            .map(|color| {
                format!(r#"<span class="swatch__chip" style="background: {color}" title="{color}"></span>"#)
            })
            .collect();
        self.html
            .push_str(&format!(r#"<div class="swatch" aria-hidden="true">{html}</div>"#));
        self.parts.push("swatch".to_string());
    }

    /// Mini stat card. Four draws: label, value, fill, tone.
    pub(crate) fn stat_card(&mut self, rng: &mut SeededRng, theme: &Theme) {
        let label = rng.pick(STAT_LABELS).copied().unwrap_or("Progresso");
        let value = rng.range_inclusive(40, 98);
        let fill = rng.range_inclusive(20, 95);
        let (tone, color) = if rng.above(0.5) {
            ("highlight", theme.highlight)
        } else {
            ("accent", theme.accent)
        };
        self.html.push_str(&format!(
            r#"<div class="stat stat--{tone}">
          <div class="stat__row"><span>{label}</span><span class="stat__value">{value}%</span></div>
          <div class="stat__bar"><div class="stat__fill" style="width: {fill}%; background: linear-gradient(90deg, {color}, {glow})"></div></div>
        </div>"#,
            label = escape_html(label),
            glow = hex_to_rgba(color, 0.55),
        ));
        self.parts.push(format!("stat-{tone}"));
    }

    pub(crate) fn finish(self, signature: String) -> Mockup {
        Mockup {
            id: self.id,
            signature,
            html: format!(
                r#"<div class="mockup mockup--{}">{}</div>"#,
                self.id, self.html
            ),
            css: self.css,
            parts: self.parts,
            script: self.script,
        }
    }
}

/// Brazilian real, e.g. `R$ 1.234,00`
pub fn format_brl(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("R$ {grouped},00")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::select_theme;

    fn idea(slug: &str, title: &str) -> Idea {
        Idea {
            key: "2024-01-01".to_string(),
            title: title.to_string(),
            domain: "Produtividade".to_string(),
            why: "teste".to_string(),
            features: vec![],
            slug: slug.to_string(),
        }
    }

    #[test]
    fn test_keyword_table_first_match_wins() {
        assert_eq!(mockup_kind_for(&idea("pomodoro-tracker", "Timer")), MockupKind::Timer);
        assert_eq!(mockup_kind_for(&idea("habit-tracker", "Hábitos")), MockupKind::Habit);
        assert_eq!(mockup_kind_for(&idea("weekly-budget", "Orçamento")), MockupKind::Budget);
        assert_eq!(mockup_kind_for(&idea("term-flashcards", "Cards")), MockupKind::Flashcards);
        assert_eq!(mockup_kind_for(&idea("readme-seed", "README")), MockupKind::Document);
        assert_eq!(mockup_kind_for(&idea("deploy-checklist", "Deploy")), MockupKind::List);
        // "timer" outranks "habit" in table order
        assert_eq!(mockup_kind_for(&idea("habit-timer", "x")), MockupKind::Timer);
    }

    #[test]
    fn test_unmatched_idea_defaults_to_list() {
        assert_eq!(mockup_kind_for(&idea("zzz", "Algo Novo")), MockupKind::List);
    }

    #[test]
    fn test_matching_is_case_insensitive_and_uses_title() {
        assert_eq!(mockup_kind_for(&idea("x", "My POMODORO")), MockupKind::Timer);
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(800), "R$ 800,00");
        assert_eq!(format_brl(1234), "R$ 1.234,00");
        assert_eq!(format_brl(3000), "R$ 3.000,00");
        assert_eq!(format_brl(1234567), "R$ 1.234.567,00");
    }

    #[test]
    fn test_every_builder_is_deterministic() {
        let kinds = [
            MockupKind::Timer,
            MockupKind::Habit,
            MockupKind::List,
            MockupKind::Budget,
            MockupKind::Flashcards,
            MockupKind::Document,
        ];
        for kind in kinds {
            let mut rng = SeededRng::new(4242);
            let theme = select_theme(&mut rng, None, None);
            let subject = idea("x", "y");
            let a = kind.build(&mut rng.clone(), &theme, &subject);
            let b = kind.build(&mut rng.clone(), &theme, &subject);
            assert_eq!(a, b, "{}", kind.id());
            assert_eq!(a.id, kind.id());
            assert!(a.signature.starts_with(kind.id()), "{}", a.signature);
            assert!(a.parts.contains(&"swatch".to_string()));
            assert!(a.html.starts_with(&format!(r#"<div class="mockup mockup--{}">"#, kind.id())));
        }
    }

    #[test]
    fn test_stat_card_only_on_data_mockups() {
        let mut rng = SeededRng::new(7);
        let theme = select_theme(&mut rng, None, None);
        let subject = idea("x", "y");
        let has_stat = |m: &Mockup| m.parts.iter().any(|p| p.starts_with("stat-"));

        assert!(has_stat(&MockupKind::Timer.build(&mut rng.clone(), &theme, &subject)));
        assert!(has_stat(&MockupKind::Budget.build(&mut rng.clone(), &theme, &subject)));
        assert!(!has_stat(&MockupKind::Flashcards.build(&mut rng.clone(), &theme, &subject)));
        assert!(!has_stat(&MockupKind::Document.build(&mut rng.clone(), &theme, &subject)));
    }
}
