use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Named colours: CSS/X11 names, matplotlib "tab:" names, hex
// ---------------------------------------------------------------------------

/// matplotlib's tableau palette, which the CSS names do not cover.
const TABLEAU: [(&str, [u8; 3]); 11] = [
    ("blue", [0x1f, 0x77, 0xb4]),
    ("orange", [0xff, 0x7f, 0x0e]),
    ("green", [0x2c, 0xa0, 0x2c]),
    ("red", [0xd6, 0x27, 0x28]),
    ("purple", [0x94, 0x67, 0xbd]),
    ("brown", [0x8c, 0x56, 0x4b]),
    ("pink", [0xe3, 0x77, 0xc2]),
    ("gray", [0x7f, 0x7f, 0x7f]),
    ("grey", [0x7f, 0x7f, 0x7f]),
    ("olive", [0xbc, 0xbd, 0x22]),
    ("cyan", [0x17, 0xbe, 0xcf]),
];

/// Resolve a colour name such as `lightgray`, `tab:grey` or `#1f77b4`.
pub fn named_color(name: &str) -> Option<Color32> {
    let name = name.trim();
    if let Some(tab) = name.strip_prefix("tab:") {
        return TABLEAU
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(tab))
            .map(|(_, [r, g, b])| Color32::from_rgb(*r, *g, *b));
    }
    if name.starts_with('#') {
        return name
            .parse::<Srgb<u8>>()
            .ok()
            .map(|c| Color32::from_rgb(c.red, c.green, c.blue));
    }
    palette::named::from_str(&name.to_ascii_lowercase())
        .map(|c| Color32::from_rgb(c.red, c.green, c.blue))
}

/// Resolve a list of colour names in order. Unknown names get the matching
/// entry of an evenly spaced palette so every layer still has a colour.
pub fn resolve_colors(names: &[&str]) -> Vec<Color32> {
    let fallback = generate_palette(names.len());
    names
        .iter()
        .zip(fallback)
        .map(|(name, fb)| {
            named_color(name).unwrap_or_else(|| {
                log::warn!("Unknown colour '{name}', using generated {fb:?}");
                fb
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_names_resolve() {
        assert_eq!(named_color("lightgray"), Some(Color32::from_rgb(211, 211, 211)));
        assert_eq!(named_color("darkviolet"), Some(Color32::from_rgb(148, 0, 211)));
        assert_eq!(named_color("MidnightBlue"), Some(Color32::from_rgb(25, 25, 112)));
    }

    #[test]
    fn tableau_and_hex_resolve() {
        assert_eq!(named_color("tab:grey"), Some(Color32::from_rgb(127, 127, 127)));
        assert_eq!(named_color("tab:blue"), Some(Color32::from_rgb(31, 119, 180)));
        assert_eq!(named_color("#ff8000"), Some(Color32::from_rgb(255, 128, 0)));
    }

    #[test]
    fn unknown_names_fall_back_to_palette() {
        assert_eq!(named_color("not-a-colour"), None);
        assert_eq!(named_color("tab:mauve"), None);

        let colors = resolve_colors(&["teal", "not-a-colour", "fuchsia"]);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], Color32::from_rgb(0, 128, 128));
        assert_eq!(colors[1], generate_palette(3)[1]);
        assert_eq!(colors[2], Color32::from_rgb(255, 0, 255));
    }

    #[test]
    fn palette_sizes() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(17);
        assert_eq!(p.len(), 17);
        assert_ne!(p[0], p[8]);
    }
}
