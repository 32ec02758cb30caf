//! Copy fragments (pt-BR)

/// Hero motto candidates
pub static POWER_LINES: &[&str] = &[
    "Transforme cada ideia em plano acionável.",
    "Micro decisões alinhadas ao objetivo do dia.",
    "Disciplina diária gera resultados consistentes.",
    "Visualize, planeje e execute sem fricção.",
    "Pequenos ciclos, progresso visível.",
    "Foco cirúrgico no que importa hoje.",
];

/// Feature top-up pool, first half
pub static TRAINING_RITUALS: &[&str] = &[
    "Revisar prioridades da semana em 5 minutos",
    "Registrar o progresso ao final de cada ciclo",
    "Mapear bloqueios críticos para hoje",
    "Definir respostas rápidas a imprevistos",
    "Ajustar metas com base no histórico",
    "Checar tendências dos últimos dias",
    "Documentar aprendizados imediatos",
    "Sincronizar lembretes com a agenda",
];

/// Feature top-up pool, second half
pub static FOCUS_POINTS: &[&str] = &[
    "Resumo diário em uma tela",
    "Indicadores de progresso por categoria",
    "Histórico navegável por semana",
    "Notificações discretas de pausa",
    "Modo foco sem distrações",
    "Comparativo com a meta anterior",
    "Exportação rápida para planilha",
    "Rótulos coloridos por contexto",
];

/// Row labels of the list mockup
pub static LIST_LABELS: &[&str] = &[
    "Revisar backlog",
    "Validar build",
    "Atualizar changelog",
    "Rodar migrações",
    "Checar métricas",
    "Publicar release",
    "Responder feedback",
    "Planejar sprint",
    "Limpar branches",
    "Testes de fumaça",
];

/// Timer segment labels
pub static TIMER_SEGMENTS: &[&str] = &["Foco", "Pausa", "Revisão", "Planejar"];

/// Front side words of the flashcards mockup
pub static FLASH_WORDS: &[&str] = &[
    "grep",
    "rebase",
    "closure",
    "mutex",
    "lifetime",
    "iterator",
    "checksum",
    "idempotente",
];

/// Hint chips of the flashcards mockup
pub static FLASH_HINTS: &[&str] = &[
    "busca por padrão",
    "reescreve histórico",
    "captura o ambiente",
    "exclusão mútua",
    "escopo de empréstimo",
    "percorre em sequência",
    "detecta corrupção",
    "mesmo efeito ao repetir",
];

/// Labels for the mini stat card
pub static STAT_LABELS: &[&str] = &[
    "Consistência",
    "Meta semanal",
    "Tempo focado",
    "Conclusão",
    "Energia",
    "Ritmo",
];

/// Weekday initials for the habit grid header
pub static WEEKDAYS: &[&str] = &["S", "T", "Q", "Q", "S", "S", "D"];

/// Budget rows, fixed order
pub static BUDGET_CATEGORIES: &[&str] = &["Fixos", "Flex", "Meta", "Saldo"];
