//! Color utilities
//!
//! Hex parsing, CSS `rgba()` formatting and a CIE Lab distance used to keep
//! consecutive days from landing on near-identical accents.

/// D65 reference white, XYZ scaled to 100
const REFERENCE_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// Parse `#rgb` / `#rrggbb` into channels. Invalid input yields black.
pub fn hex_to_rgb(hex: &str) -> [u8; 3] {
    let value = hex.trim().trim_start_matches('#');
    let expanded: String = match value.len() {
        3 => value.chars().flat_map(|c| [c, c]).collect(),
        6 => value.to_string(),
        _ => return [0, 0, 0],
    };
    match u32::from_str_radix(&expanded, 16) {
        Ok(int) => [
            ((int >> 16) & 0xff) as u8,
            ((int >> 8) & 0xff) as u8,
            (int & 0xff) as u8,
        ],
        Err(_) => [0, 0, 0],
    }
}

/// Format a hex color as `rgba(r, g, b, a)`. Alpha is passed through as-is.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let [r, g, b] = hex_to_rgb(hex);
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// True for `#rgb` / `#rrggbb` strings
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn srgb_channel_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

fn rgb_to_xyz([r, g, b]: [u8; 3]) -> [f64; 3] {
    let r = srgb_channel_to_linear(r) * 100.0;
    let g = srgb_channel_to_linear(g) * 100.0;
    let b = srgb_channel_to_linear(b) * 100.0;
    [
        r * 0.4124 + g * 0.3576 + b * 0.1805,
        r * 0.2126 + g * 0.7152 + b * 0.0722,
        r * 0.0193 + g * 0.1192 + b * 0.9505,
    ]
}

fn lab_pivot(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let fx = lab_pivot(xyz[0] / REFERENCE_WHITE[0]);
    let fy = lab_pivot(xyz[1] / REFERENCE_WHITE[1]);
    let fz = lab_pivot(xyz[2] / REFERENCE_WHITE[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Hex color to CIE Lab
pub fn hex_to_lab(hex: &str) -> [f64; 3] {
    xyz_to_lab(rgb_to_xyz(hex_to_rgb(hex)))
}

/// Euclidean distance between two colors in Lab space (CIE76 ΔE)
pub fn color_delta_e(a: &str, b: &str) -> f64 {
    let la = hex_to_lab(a);
    let lb = hex_to_lab(b);
    ((la[0] - lb[0]).powi(2) + (la[1] - lb[1]).powi(2) + (la[2] - lb[2]).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "#38bdf8", "#22d3ee", "#60a5fa", "#f472b6", "#a855f7", "#f97316", "#000", "#fff",
        "#2563eb", "#34d399", "#123456",
    ];

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#38bdf8"), [0x38, 0xbd, 0xf8]);
        assert_eq!(hex_to_rgb("#fff"), [255, 255, 255]);
        assert_eq!(hex_to_rgb("0a0b0c"), [10, 11, 12]);
    }

    #[test]
    fn test_invalid_hex_is_black() {
        assert_eq!(hex_to_rgb("not a color"), [0, 0, 0]);
        assert_eq!(hex_to_rgb("#zzzzzz"), [0, 0, 0]);
        assert_eq!(hex_to_rgb(""), [0, 0, 0]);
    }

    #[test]
    fn test_hex_to_rgba_format() {
        assert_eq!(hex_to_rgba("#38bdf8", 0.22), "rgba(56, 189, 248, 0.22)");
        assert_eq!(hex_to_rgba("#abc", 1.0), "rgba(170, 187, 204, 1)");
        // alpha is not clamped here
        assert_eq!(hex_to_rgba("#000000", 1.5), "rgba(0, 0, 0, 1.5)");
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#0f172a"));
        assert!(!is_hex_color("rgba(0, 0, 0, 0.2)"));
        assert!(!is_hex_color("#12345"));
    }

    #[test]
    fn test_delta_e_identity_and_symmetry() {
        for a in SAMPLES {
            assert_eq!(color_delta_e(a, a), 0.0);
            for b in SAMPLES {
                let ab = color_delta_e(a, b);
                let ba = color_delta_e(b, a);
                assert!((ab - ba).abs() < 1e-9, "{a} vs {b}: {ab} != {ba}");
            }
        }
    }

    #[test]
    fn test_delta_e_black_white() {
        let d = color_delta_e("#000000", "#ffffff");
        assert!((d - 100.0).abs() < 0.5, "unexpected distance {d}");
    }

    #[test]
    fn test_close_colors_are_close() {
        assert!(color_delta_e("#38bdf8", "#39bdf8") < 1.0);
        assert!(color_delta_e("#38bdf8", "#f97316") > 10.0);
    }
}
