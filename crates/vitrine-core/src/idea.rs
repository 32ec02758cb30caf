//! The "app of the day"
//!
//! Day keys, seeds, and the local (offline) idea catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conceptual app described by one preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub key: String,
    pub title: String,
    pub domain: String,
    pub why: String,
    pub features: Vec<String>,
    pub slug: String,
}

struct DomainEntry {
    name: &'static str,
    why: &'static str,
}

struct IdeaEntry {
    title: &'static str,
    slug: &'static str,
}

const DOMAINS: &[DomainEntry] = &[
    DomainEntry { name: "Produtividade", why: "ajuda a organizar o dia e manter o foco." },
    DomainEntry { name: "Saúde", why: "promove hábitos saudáveis com metas simples." },
    DomainEntry { name: "Estudos", why: "facilita revisão e prática constante." },
    DomainEntry { name: "Finanças", why: "torna controle de gastos acessível e claro." },
    DomainEntry { name: "DevTools", why: "agiliza tarefas repetitivas do desenvolvedor." },
];

const IDEAS: &[IdeaEntry] = &[
    IdeaEntry { title: "Tracker de Hábitos Minimalista", slug: "habit-tracker" },
    IdeaEntry { title: "Timer Pomodoro com Relatórios", slug: "pomodoro-tracker" },
    IdeaEntry { title: "Lista de Tarefas por Prioridade", slug: "priority-todo" },
    IdeaEntry { title: "Orçamento Semanal Simples", slug: "weekly-budget" },
    IdeaEntry { title: "Flashcards de Terminal", slug: "term-flashcards" },
    IdeaEntry { title: "Gerador de README Inicial", slug: "readme-seed" },
    IdeaEntry { title: "Checklist de Deploy", slug: "deploy-checklist" },
];

const FEATURES: &[&str] = &[
    "CRUD básico (criar, listar, editar, excluir)",
    "Persistência local (LocalStorage/JSON) sem backend",
    "Filtros e busca simples",
    "Exportar/Importar dados (.json)",
    "Atalhos de teclado",
    "Tema claro/escuro",
];

/// `YYYY-MM-DD` for the UTC date of `now`
pub fn day_key(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Polynomial rolling hash of the key: `h = h * 33 + code`, wrapping at 32 bits
pub fn seed_from_key(key: &str) -> u32 {
    key.encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(33).wrapping_add(u32::from(unit)))
}

fn pick_by<T>(list: &[T], seed: u32) -> &T {
    &list[seed as usize % list.len()]
}

/// Deterministic offline idea for a day key
pub fn generate_idea_locally(key: &str) -> Idea {
    let seed = seed_from_key(key);
    let domain = pick_by(DOMAINS, seed);
    let idea = pick_by(IDEAS, seed >> 3);

    let reversed: Vec<&str> = FEATURES.iter().rev().copied().collect();
    let raw = [
        *pick_by(FEATURES, seed >> 5),
        *pick_by(&reversed, seed >> 7),
        *pick_by(&FEATURES[1..], seed >> 9),
    ];

    let mut features: Vec<String> = Vec::with_capacity(3);
    for feature in raw {
        if !features.iter().any(|f| f == feature) {
            features.push(feature.to_string());
        }
    }
    // Top up from the shifted seed; advancing the shift guarantees progress
    let mut shift = 11 + features.len() as u32;
    while features.len() < 3 {
        let candidate = FEATURES[(seed.checked_shr(shift).unwrap_or(0)) as usize % FEATURES.len()];
        if !features.iter().any(|f| f == candidate) {
            features.push(candidate.to_string());
        }
        shift += 1;
        if shift > 64 {
            if let Some(missing) = FEATURES.iter().find(|f| !features.iter().any(|x| x == *f)) {
                features.push(missing.to_string());
            }
        }
    }

    Idea {
        key: key.to_string(),
        title: idea.title.to_string(),
        domain: domain.name.to_string(),
        why: domain.why.to_string(),
        features,
        slug: idea.slug.to_string(),
    }
}

/// Lowercase ASCII kebab-case with Latin diacritics folded
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;
    for c in input.chars().flat_map(char::to_lowercase) {
        let folded = fold_diacritic(c);
        if folded.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(folded);
        } else if !is_combining_mark(c) {
            pending_dash = true;
        }
    }
    slug
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
