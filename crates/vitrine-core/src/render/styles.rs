//! Shell stylesheet

use crate::pools::FontStack;
use crate::select::Theme;

/// `:root` custom properties bound to the resolved theme
pub(super) fn root_variables(theme: &Theme, typography: &FontStack, pattern_css: &str) -> String {
    format!(
        r#"
      :root {{
        --base: {base};
        --surface: {surface};
        --panel: {panel};
        --surface-soft: {surface_soft};
        --text: {text};
        --muted: {muted};
        --border: {border};
        --accent: {accent};
        --accent-soft: {accent_soft};
        --accent-strong: {accent_strong};
        --highlight: {highlight};
        --highlight-soft: {highlight_soft};
        --success: {success};
        --warning: {warning};
        --shadow: {shadow};
        --font-body: {body};
        --font-heading: {heading};
        --background: {background};
        --pattern: {pattern_css};
      }}
"#,
        base = theme.base,
        surface = theme.surface,
        panel = theme.panel,
        surface_soft = theme.surface_soft,
        text = theme.text,
        muted = theme.muted,
        border = theme.border,
        accent = theme.accent,
        accent_soft = theme.accent_soft,
        accent_strong = theme.accent_strong,
        highlight = theme.highlight,
        highlight_soft = theme.highlight_soft,
        success = theme.success,
        warning = theme.warning,
        shadow = theme.shadow,
        body = typography.body,
        heading = typography.heading,
        background = theme.background,
    )
}

/// Rules shared by every layout; layouts only override the stage grid
pub(super) const BASE_CSS: &str = r#"
      * { box-sizing: border-box; }
      body {
        margin: 0;
        min-height: 100vh;
        background: var(--background);
        color: var(--text);
        font: 15px/1.6 var(--font-body);
      }
      body::before {
        content: '';
        position: fixed;
        inset: 0;
        pointer-events: none;
        background-image: var(--pattern);
        background-size: 32px 32px;
        z-index: 0;
      }
      button, input { font: inherit; }
      a.back {
        position: fixed;
        top: 20px;
        left: 24px;
        z-index: 2;
        text-decoration: none;
        color: var(--muted);
        font-size: 0.8rem;
        letter-spacing: 0.08em;
        text-transform: uppercase;
      }
      a.back::before { content: '← '; }
      .stage {
        position: relative;
        z-index: 1;
        display: grid;
        gap: 24px;
        max-width: 1120px;
        margin: 0 auto;
        padding: 72px 24px 40px;
        grid-template-columns: minmax(0, 1fr);
        grid-template-areas: "hero" "preview" "features" "pin";
      }
      .hero { grid-area: hero; position: relative; display: flex; flex-direction: column; gap: 14px; overflow: hidden; }
      .preview { grid-area: preview; }
      .features { grid-area: features; }
      .pin { grid-area: pin; }
      .eyebrow { text-transform: uppercase; letter-spacing: 0.18em; font-size: 0.72rem; color: var(--muted); }
      .hero h1 { margin: 0; font-family: var(--font-heading); font-size: clamp(1.8rem, 4.4vw, 3rem); line-height: 1.1; }
      .hero__why { margin: 0; max-width: 620px; color: var(--muted); }
      .hero__chips { display: flex; flex-wrap: wrap; gap: 10px; }
      .chip { padding: 6px 12px; border-radius: 999px; border: 1px solid var(--border); background: var(--surface); font-size: 0.78rem; }
      .chip--domain { text-transform: uppercase; letter-spacing: 0.06em; }
      .chip--motto { background: var(--accent-soft); font-style: italic; }
      .shape { position: absolute; border-radius: 50%; pointer-events: none; filter: blur(2px); opacity: 0.7; }
      .shape--a { width: 180px; height: 180px; right: -40px; top: -60px; background: var(--accent-soft); }
      .shape--b { width: 90px; height: 90px; right: 120px; bottom: -30px; background: var(--highlight-soft); }
      .features h2, .pin h2 { margin: 0 0 12px; font-size: 0.9rem; letter-spacing: 0.06em; text-transform: uppercase; color: var(--muted); }
      .features ul { list-style: none; margin: 0; padding: 0; display: flex; flex-direction: column; gap: 10px; }
      .features li { padding: 12px 14px; border-radius: 14px; background: var(--surface); border: 1px solid var(--border); }
      .pin { padding: 18px 20px; border-radius: 18px; background: var(--surface); border: 1px solid var(--border); display: grid; gap: 12px; }
      .pin__row { display: grid; grid-template-columns: 90px 1fr 48px; gap: 10px; align-items: center; font-size: 0.84rem; }
      .pin__row input { accent-color: var(--accent); }
      .pin__actions { display: flex; flex-wrap: wrap; gap: 8px; }
      .pin__actions button { padding: 8px 14px; border-radius: 999px; border: 1px solid var(--border); background: transparent; color: var(--text); cursor: pointer; }
      .pin__actions button:hover { border-color: var(--accent); }
      .pin__link { width: 100%; padding: 8px 10px; border-radius: 10px; border: 1px solid var(--border); background: var(--surface-soft); color: var(--muted); font-size: 0.78rem; }
      .tech { position: relative; z-index: 1; text-align: center; padding: 0 24px 32px; font-size: 0.76rem; color: var(--muted); }
      @media (max-width: 760px) {
        a.back { position: static; display: inline-block; margin: 16px 20px 0; }
        .stage { grid-template-columns: minmax(0, 1fr) !important; grid-template-areas: "hero" "preview" "features" "pin" !important; padding: 32px 18px; }
        .hero { position: static; }
      }
"#;
