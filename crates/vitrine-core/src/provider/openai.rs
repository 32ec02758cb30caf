//! OpenAI-compatible chat completions provider

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};
use tracing::debug;

use super::{GenerationProvider, ProjectApp};
use crate::config::RemoteConfig;
use crate::error::ProviderError;
use crate::idea::{seed_from_key, slugify, Idea};

const SNIPPET_LIMIT: usize = 3200;
const IDEA_TEMPERATURE: f64 = 0.85;
const APP_TEMPERATURE: f64 = 0.65;

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static SCRIPT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script.*?</script>").unwrap());
static STYLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style.*?</style>").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<title>([^<]*)</title>").unwrap());

const DIRECTIONS: &[&str] = &[
    "una hábitos de estudo com pequenas metas diárias",
    "conecte produtividade pessoal com decisões rápidas de planejamento",
    "transforme listas soltas em rotinas de prática diárias",
    "aproveite timers e sugestões para criar assistentes úteis",
    "gere painéis que unam planejamento da semana e foco do dia",
    "crie ferramentas que convertam recomendações em ações concretas",
];

const ANGLES: &[&str] = &[
    "inclua métricas simples e objetivos acionáveis",
    "priorize acessibilidade e uso rápido no dia a dia",
    "forneça fichas técnicas baixáveis para revisar o plano",
    "permita registrar decisões e compromissos em poucos cliques",
    "ofereça feedback visual claro e motivações curtas",
    "combine checklists com timers contextuais",
];

const DEFAULT_FEATURES: &[&str] = &["CRUD básico", "Persistência local", "UX clara"];

/// Seed-derived creative direction: `(directions[seed % 6], angles[(seed >> 5) % 6])`
fn creative_brief(seed: u32) -> (&'static str, &'static str) {
    (
        DIRECTIONS[seed as usize % DIRECTIONS.len()],
        ANGLES[(seed >> 5) as usize % ANGLES.len()],
    )
}

/// Visible text of an HTML document, whitespace-collapsed and truncated
fn strip_html_to_snippet(html: &str, limit: usize) -> String {
    let text = COMMENT_RE.replace_all(html, " ");
    let text = SCRIPT_RE.replace_all(&text, " ");
    let text = STYLE_RE.replace_all(&text, " ");
    let text = TAG_RE.replace_all(&text, " ");
    let text = SPACE_RE.replace_all(&text, " ");
    text.trim().chars().take(limit).collect()
}

fn extract_title(html: &str) -> Option<String> {
    TITLE_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Existing previews, summarized for the prompt
struct PreviewContext {
    reference: String,
    reference_title: String,
    current: String,
    current_title: String,
}

impl PreviewContext {
    async fn load(previews_dir: &Path) -> Self {
        let reference = read_or_empty(&previews_dir.join("preview-1.html")).await;
        let current = read_or_empty(&previews_dir.join("preview-2.html")).await;
        Self {
            reference_title: extract_title(&reference).unwrap_or_else(|| "Preview 1".to_string()),
            current_title: extract_title(&current).unwrap_or_else(|| "Preview 2 atual".to_string()),
            reference: strip_html_to_snippet(&reference, SNIPPET_LIMIT),
            current: strip_html_to_snippet(&current, SNIPPET_LIMIT),
        }
    }

    /// Snippet messages appended after the main prompt
    fn messages(&self, reference_label: &str, current_label: &str) -> Vec<Value> {
        let mut messages = Vec::new();
        if !self.reference.is_empty() {
            messages.push(json!({
                "role": "user",
                "content": format!("{} ({}):\n{}", reference_label, self.reference_title, self.reference)
            }));
        }
        if !self.current.is_empty() {
            messages.push(json!({
                "role": "user",
                "content": format!("{} ({}):\n{}", current_label, self.current_title, self.current)
            }));
        }
        messages
    }
}

async fn read_or_empty(path: &Path) -> String {
    tokio::fs::read_to_string(path).await.unwrap_or_default()
}

/// Chat completions client for any OpenAI-compatible endpoint
pub struct OpenAiProvider {
    client: reqwest::Client,
    config: RemoteConfig,
    previews_dir: PathBuf,
}

impl OpenAiProvider {
    /// Fails with [`ProviderError::NotConfigured`] when no API key is set
    pub fn new(config: RemoteConfig, previews_dir: impl Into<PathBuf>) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::NotConfigured("OPENAI_API_KEY ausente".to_string()));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            config,
            previews_dir: previews_dir.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// POST a chat request in JSON mode and parse the message content as JSON
    async fn chat_json(&self, messages: Vec<Value>, temperature: f64) -> Result<Value, ProviderError> {
        let body = json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": temperature,
            "response_format": { "type": "json_object" }
        });

        debug!("Chat completion request to model: {}", self.config.model);
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = response.json().await?;
        let content = json
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|arr| arr.first())
            .and_then(|choice| choice.get("message"))
            .and_then(|msg| msg.get("content"))
            .and_then(|t| t.as_str())
            .unwrap_or("{}");

        let parsed: Value = serde_json::from_str(content)?;
        if !parsed.is_object() {
            return Err(ProviderError::Malformed(format!(
                "expected a JSON object, got: {}",
                parsed
            )));
        }
        Ok(parsed)
    }
}

fn string_field<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_idea(key: &str, parsed: &Value) -> Idea {
    let title = string_field(parsed, "title").unwrap_or("Projeto do Dia").to_string();
    let features: Vec<String> = parsed
        .get("features")
        .and_then(|f| f.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|f| f.as_str())
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .take(3)
                .collect()
        })
        .filter(|f: &Vec<String>| !f.is_empty())
        .unwrap_or_else(|| DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect());

    Idea {
        key: key.to_string(),
        slug: slugify(&title),
        domain: string_field(parsed, "domain").unwrap_or("Produtividade").to_string(),
        why: string_field(parsed, "why")
            .unwrap_or("resolve um problema direto e recorrente.")
            .to_string(),
        features,
        title,
    }
}

fn parse_app(parsed: &Value) -> ProjectApp {
    let title = string_field(parsed, "title").unwrap_or("Mini App do Dia").to_string();
    ProjectApp {
        slug: slugify(&title),
        html: parsed
            .get("html")
            .and_then(|h| h.as_str())
            .unwrap_or("")
            .to_string(),
        title,
    }
}

#[async_trait]
impl GenerationProvider for OpenAiProvider {
    async fn generate_project_idea(&self, day_key: &str) -> Result<Idea, ProviderError> {
        let context = PreviewContext::load(&self.previews_dir).await;
        let (direction, angle) = creative_brief(seed_from_key(day_key));

        let system = "Você é um assistente que gera ideias de projetos diários úteis para devs iniciantes. Use as referências fornecidas como base e responda apenas JSON.";
        let prompt = format!(
            r#"Gere uma única ideia de projeto para a data UTC {day_key}.
Requisitos:
- deve ser útil e acionável, sem depender de backend
- considere como reutilizar ou evoluir elementos de "{reference}" e "{current}"
- apresente domínio, justificativa e 3 features essenciais e distintas
- mantenha linguagem em português do Brasil

Direção criativa do dia: {direction}; {angle}.

Formato JSON:
{{
  "title": string,
  "domain": string,
  "why": string,
  "features": [string, string, string]
}}"#,
            reference = context.reference_title,
            current = context.current_title,
        );

        let mut messages = vec![
            json!({ "role": "system", "content": system }),
            json!({ "role": "user", "content": prompt }),
        ];
        messages.extend(context.messages("Resumo do Preview 1", "Resumo do Preview 2 atual"));

        let parsed = self.chat_json(messages, IDEA_TEMPERATURE).await?;
        Ok(parse_idea(day_key, &parsed))
    }

    async fn generate_project_app(&self, day_key: &str) -> Result<ProjectApp, ProviderError> {
        let context = PreviewContext::load(&self.previews_dir).await;
        let (direction, angle) = creative_brief(seed_from_key(day_key));

        let system = "Você é um gerador de miniprojetos front-end autocontidos, sem dependências externas. Responda apenas JSON.";
        let prompt = format!(
            r#"Crie um único arquivo HTML COMPLETO (doctype, head, body) com CSS e JS inline.
Referência central: use "{reference}" como guia para a estrutura limpa e navegável, porém entregue uma identidade visual inédita (paleta, ritmo, grafismos).
Referência complementar: "{current}" pode inspirar microinterações e animações sutis.

Requisitos:
- Visual minimalista com blocos/grids, respiros generosos e foco em elementos visuais; evite parágrafos longos.
- Interface compreensível em poucos segundos, textos super curtos e acionáveis.
- Acessível (roles ARIA básicos, foco visível)
- Sem frameworks, sem fontes externas
- Interativo: mínimo 3 elementos com comportamento (ex.: selects, timers, checklists).
- Botão "Reset" e link "Voltar" para '../../../index.html'.
- Disponibilize um botão que gere ficha técnica em texto (download) descrevendo o projeto.
- Linguagem e textos em pt-BR.

Direção criativa do dia: {direction}; {angle}.
Formato JSON: {{ "title": string, "html": string }}"#,
            reference = context.reference_title,
            current = context.current_title,
        );

        let mut messages = vec![
            json!({ "role": "system", "content": system }),
            json!({ "role": "user", "content": prompt }),
        ];
        messages.extend(context.messages("Referência Preview 1", "Referência Preview 2 atual"));

        let parsed = self.chat_json(messages, APP_TEMPERATURE).await?;
        Ok(parse_app(&parsed))
    }
}
