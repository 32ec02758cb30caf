//! Theme presets and font stacks

/// Which resolved theme color a background layer is tinted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerTone {
    Accent,
    Highlight,
}

/// One radial gradient of a preset background
#[derive(Debug, Clone, Copy)]
pub struct BackgroundLayer {
    pub shape: &'static str,
    pub size: &'static str,
    pub position: &'static str,
    pub tone: LayerTone,
    pub stop: &'static str,
}

/// A fixed palette a day's Theme is derived from
#[derive(Debug)]
pub struct ThemePreset {
    pub id: &'static str,
    pub base: &'static str,
    pub surface: &'static str,
    pub panel: &'static str,
    pub surface_soft: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub accents: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub background_layers: &'static [BackgroundLayer],
    pub shadow: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    /// Selection weight (1.0 unless a preset should appear more or less often)
    pub weight: f64,
}

/// Body / heading font pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStack {
    pub body: &'static str,
    pub heading: &'static str,
}

pub static FONT_STACKS: &[FontStack] = &[
    FontStack {
        body: r#""Inter", system-ui, -apple-system, "Segoe UI", sans-serif"#,
        heading: r#""Space Grotesk", system-ui, sans-serif"#,
    },
    FontStack {
        body: r#""Manrope", system-ui, -apple-system, "Segoe UI", sans-serif"#,
        heading: r#""Manrope", system-ui, sans-serif"#,
    },
    FontStack {
        body: r#"system-ui, -apple-system, "Segoe UI", sans-serif"#,
        heading: r#"system-ui, -apple-system, "Segoe UI", sans-serif"#,
    },
    FontStack {
        body: r#""Work Sans", system-ui, sans-serif"#,
        heading: r#""Work Sans", system-ui, sans-serif"#,
    },
    FontStack {
        body: r#""Source Sans Pro", system-ui, sans-serif"#,
        heading: r#""Poppins", system-ui, sans-serif"#,
    },
    FontStack {
        body: r#""IBM Plex Sans", system-ui, sans-serif"#,
        heading: r#""IBM Plex Sans Condensed", system-ui, sans-serif"#,
    },
    FontStack {
        body: r#""Merriweather", Georgia, serif"#,
        heading: r#""Playfair Display", Georgia, serif"#,
    },
];

const fn layer(
    size: &'static str,
    position: &'static str,
    tone: LayerTone,
    stop: &'static str,
) -> BackgroundLayer {
    BackgroundLayer {
        shape: "radial",
        size,
        position,
        tone,
        stop,
    }
}

pub static THEME_PRESETS: &[ThemePreset] = &[
    ThemePreset {
        id: "nebula",
        base: "#050910",
        surface: "#0b1629",
        panel: "#101f37",
        surface_soft: "#0f1a33",
        text: "#e5e7eb",
        muted: "rgba(148, 163, 184, 0.82)",
        border: "rgba(56, 189, 248, 0.24)",
        accents: &["#38bdf8", "#22d3ee", "#60a5fa"],
        highlights: &["#f472b6", "#a855f7", "#f97316"],
        background_layers: &[
            layer("1050px 720px", "-12% -18%", LayerTone::Accent, "60%"),
            layer("820px 640px", "118% -24%", LayerTone::Highlight, "64%"),
        ],
        shadow: "0 28px 60px rgba(15, 23, 42, 0.52)",
        success: "#34d399",
        warning: "#f97316",
        weight: 1.0,
    },
    ThemePreset {
        id: "solstice",
        base: "#f8fafc",
        surface: "#ffffff",
        panel: "#f1f5f9",
        surface_soft: "#e2e8f0",
        text: "#0f172a",
        muted: "rgba(71, 85, 105, 0.82)",
        border: "rgba(148, 163, 184, 0.35)",
        accents: &["#2563eb", "#0ea5e9", "#f97316"],
        highlights: &["#22c55e", "#8b5cf6", "#facc15"],
        background_layers: &[
            layer("980px 660px", "-18% -22%", LayerTone::Accent, "64%"),
            layer("860px 700px", "112% -18%", LayerTone::Highlight, "68%"),
        ],
        shadow: "0 24px 52px rgba(15, 23, 42, 0.12)",
        success: "#16a34a",
        warning: "#dc2626",
        weight: 1.0,
    },
    ThemePreset {
        id: "ember",
        base: "#1b0f12",
        surface: "#26141a",
        panel: "#301a21",
        surface_soft: "#3a222b",
        text: "#f8fafc",
        muted: "rgba(249, 168, 212, 0.86)",
        border: "rgba(248, 113, 113, 0.28)",
        accents: &["#fb7185", "#f97316", "#f43f5e"],
        highlights: &["#a855f7", "#22d3ee", "#facc15"],
        background_layers: &[
            layer("960px 640px", "-10% -18%", LayerTone::Accent, "58%"),
            layer("780px 600px", "118% -20%", LayerTone::Highlight, "64%"),
        ],
        shadow: "0 32px 68px rgba(12, 10, 14, 0.62)",
        success: "#34d399",
        warning: "#f97316",
        weight: 1.0,
    },
    ThemePreset {
        id: "forest",
        base: "#0f1712",
        surface: "#132015",
        panel: "#1a2c1d",
        surface_soft: "#213723",
        text: "#e2f5e9",
        muted: "rgba(148, 225, 179, 0.82)",
        border: "rgba(56, 189, 148, 0.28)",
        accents: &["#34d399", "#22c55e", "#4ade80"],
        highlights: &["#38bdf8", "#f97316", "#facc15"],
        background_layers: &[
            layer("960px 700px", "-14% -22%", LayerTone::Accent, "60%"),
            layer("840px 660px", "118% -18%", LayerTone::Highlight, "64%"),
        ],
        shadow: "0 28px 62px rgba(7, 32, 18, 0.58)",
        success: "#22c55e",
        warning: "#fbbf24",
        weight: 1.0,
    },
    ThemePreset {
        id: "tide",
        base: "#061a1f",
        surface: "#0a242b",
        panel: "#0e2f38",
        surface_soft: "#123a44",
        text: "#e0f2f1",
        muted: "rgba(153, 214, 214, 0.82)",
        border: "rgba(45, 212, 191, 0.26)",
        accents: &["#2dd4bf", "#06b6d4", "#a3e635"],
        highlights: &["#fb923c", "#e879f9", "#fde047"],
        background_layers: &[
            layer("1000px 680px", "-16% -20%", LayerTone::Accent, "62%"),
            layer("800px 620px", "116% -22%", LayerTone::Highlight, "66%"),
        ],
        shadow: "0 30px 64px rgba(2, 20, 24, 0.55)",
        success: "#4ade80",
        warning: "#fb923c",
        weight: 0.9,
    },
    ThemePreset {
        id: "paper",
        base: "#faf7f2",
        surface: "#fffdf9",
        panel: "#f3eee6",
        surface_soft: "#ebe4d8",
        text: "#292524",
        muted: "rgba(87, 83, 78, 0.82)",
        border: "rgba(168, 162, 158, 0.38)",
        accents: &["#c2410c", "#0f766e", "#4338ca"],
        highlights: &["#ca8a04", "#be185d", "#0284c7"],
        background_layers: &[
            layer("940px 640px", "-14% -20%", LayerTone::Accent, "62%"),
            layer("820px 660px", "114% -16%", LayerTone::Highlight, "66%"),
        ],
        shadow: "0 20px 44px rgba(41, 37, 36, 0.12)",
        success: "#15803d",
        warning: "#b45309",
        weight: 0.8,
    },
];
