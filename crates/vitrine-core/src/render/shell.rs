//! The complete preview document

use serde_json::json;

use crate::idea::Idea;
use crate::mockup::Mockup;
use crate::pools::{FontStack, HeroMode};
use crate::profile::VariantProfile;
use crate::select::Theme;

use super::script::PIN_PANEL_SCRIPT;
use super::styles::{root_variables, BASE_CSS};
use super::{escape_html, escape_json_for_script};

/// Everything the shell needs for one document
#[derive(Debug, Clone, Copy)]
pub struct ShellInput<'a> {
    pub key: &'a str,
    pub idea: &'a Idea,
    pub theme: &'a Theme,
    pub features: &'a [String],
    pub motto: &'a str,
    pub pattern_css: &'a str,
    pub profile: &'a VariantProfile,
    pub typography: &'a FontStack,
    pub layout_id: &'a str,
    pub hero_mode: HeroMode,
    pub layout_css: &'a str,
    pub mockup: &'a Mockup,
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Render the self-contained HTML document. Pure.
pub fn render_shell(input: &ShellInput<'_>) -> String {
    let idea = input.idea;
    let title = escape_html(or_default(&idea.title, "Projeto do Dia"));
    let domain = escape_html(or_default(&idea.domain, "Produtividade"));
    let why = escape_html(or_default(&idea.why, "resolve um problema direto e recorrente."));
    let motto = escape_html(input.motto);
    let key = escape_html(input.key);
    let layout_id = escape_html(input.layout_id);
    let hero_mode = input.hero_mode.as_str();

    let features: String = input
        .features
        .iter()
        .map(|f| format!("<li>{}</li>", escape_html(f)))
        .collect::<Vec<_>>()
        .join("\n            ");

    let data = json!({
        "key": input.key,
        "title": idea.title,
        "domain": idea.domain,
        "why": idea.why,
        "slug": idea.slug,
        "features": input.features,
        "profile": input.profile,
    });
    let island = escape_json_for_script(&data.to_string());

    let weights = input.profile.weights;
    let percent = |w: f64| (w * 100.0).round() as u32;
    let slider = |axis: &str, label: &str, value: u32| {
        format!(
            r#"<label class="pin__row"><span>{label}</span><input type="range" min="5" max="70" value="{value}" data-weight="{axis}" /><output data-weight-out="{axis}">{value}%</output></label>"#
        )
    };
    let sliders = [
        slider("theme", "Tema", percent(weights.theme)),
        slider("layout", "Layout", percent(weights.layout)),
        slider("pattern", "Padrão", percent(weights.pattern)),
    ]
    .join("\n          ");

    let mockup_script = input
        .mockup
        .script
        .as_deref()
        .map(|s| format!("\n    <script>{s}</script>"))
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="pt-BR">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <style>{variables}{BASE_CSS}{layout_css}{mockup_css}    </style>
  </head>
  <body data-layout="{layout_id}" data-hero="{hero_mode}">
    <a class="back" href="../../../index.html">Voltar</a>
    <main class="stage layout-{layout_id}">
      <header class="hero hero--{hero_mode}">
        <span class="shape shape--a" aria-hidden="true"></span>
        <span class="shape shape--b" aria-hidden="true"></span>
        <div class="eyebrow">Projeto do dia · {key}</div>
        <h1>{title}</h1>
        <p class="hero__why">{why}</p>
        <div class="hero__chips">
          <span class="chip chip--domain">{domain}</span>
          <span class="chip chip--motto">{motto}</span>
        </div>
      </header>
      <section class="preview" aria-label="Prévia do app">
        {mockup_html}
      </section>
      <section class="features">
        <h2>Features essenciais</h2>
        <ul>
            {features}
        </ul>
      </section>
      <section class="pin" aria-label="Pin do dia">
        <h2>Pin do dia</h2>
          {sliders}
        <div class="pin__actions">
          <button type="button" data-action="permalink">Copiar permalink</button>
          <button type="button" data-action="export">Exportar perfil</button>
          <button type="button" data-action="sheet">Baixar ficha técnica</button>
        </div>
        <input class="pin__link" type="text" readonly data-permalink placeholder="permalink" />
      </section>
    </main>
    <div class="tech">Preview diário · {key} · {theme_id} / {layout_id} / {pattern_id} / {mockup_id}</div>
    <script type="application/json" id="preview-data">{island}</script>
    <script>{PIN_PANEL_SCRIPT}</script>{mockup_script}
  </body>
</html>
"#,
        variables = root_variables(input.theme, input.typography, input.pattern_css),
        layout_css = input.layout_css,
        mockup_css = input.mockup.css,
        mockup_html = input.mockup.html,
        theme_id = escape_html(&input.profile.theme_id),
        pattern_id = escape_html(&input.profile.pattern_id),
        mockup_id = escape_html(&input.profile.mockup_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mockup::build_app_mockup;
    use crate::pools::LAYOUT_VARIANTS;
    use crate::profile::Weights;
    use crate::rng::SeededRng;
    use crate::select::{select_pattern, select_theme};

    fn render_for(idea: &Idea) -> String {
        let mut rng = SeededRng::new(100);
        let theme = select_theme(&mut rng, None, None);
        let pattern = select_pattern(&mut rng, &theme, None, None);
        let mockup = build_app_mockup(&mut rng, &theme, idea);
        let layout = &LAYOUT_VARIANTS[0];
        let profile = VariantProfile {
            seed: 100,
            key: idea.key.clone(),
            theme_id: theme.id.to_string(),
            layout_id: layout.id.to_string(),
            pattern_id: pattern.id.to_string(),
            mockup_id: mockup.id.to_string(),
            signature: "sig".to_string(),
            accent: theme.accent.to_string(),
            weights: Weights::default(),
            parts: mockup.parts.clone(),
            hero_mode: layout.hero_mode,
        };
        render_shell(&ShellInput {
            key: &idea.key,
            idea,
            theme: &theme,
            features: &idea.features,
            motto: "Pequenos ciclos, progresso visível.",
            pattern_css: &pattern.css,
            profile: &profile,
            typography: &theme.font,
            layout_id: layout.id,
            hero_mode: layout.hero_mode,
            layout_css: layout.css,
            mockup: &mockup,
        })
    }

    fn idea(title: &str) -> Idea {
        Idea {
            key: "2024-01-01".to_string(),
            title: title.to_string(),
            domain: "Produtividade".to_string(),
            why: "ajuda a organizar o dia".to_string(),
            features: vec!["Atalhos <kbd>".to_string(), "Tema claro/escuro".to_string()],
            slug: "priority-todo".to_string(),
        }
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_for(&idea("<img src=x onerror=alert(1)>"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img"));
        assert!(html.contains("<li>Atalhos &lt;kbd&gt;</li>"));
    }

    #[test]
    fn test_json_island_cannot_close_script() {
        let html = render_for(&idea("</script><script>alert(1)</script>"));
        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains("\\u003c/script\\u003e"));
    }

    #[test]
    fn test_document_structure() {
        let html = render_for(&idea("Lista de Tarefas"));
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("--accent: #"));
        assert!(html.contains(r#"href="../../../index.html">Voltar</a>"#));
        assert!(html.contains(r#"value="42" data-weight="theme""#));
        assert!(html.contains(r#"value="33" data-weight="layout""#));
        assert!(html.contains(r#"value="25" data-weight="pattern""#));
        assert!(html.contains(r#"data-action="sheet""#));
        assert!(html.contains("Preview diário · 2024-01-01"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
