// marklet/src/domain/color.rs

/// Base palette of the color picker, in picker order. Uppercase hex; all
/// stored colors are compared against this form.
pub const PALETTE: [&str; 16] = [
    "#B80000", "#DB3E00", "#FCCB00", "#008B02", "#006B76", "#1273DE", "#004DCF", "#5300EB",
    "#EB9694", "#FAD0C3", "#FEF3BD", "#C1E1C5", "#BEDADC", "#C4DEF6", "#BED3F3", "#D4C4FB",
];

/// Background used when a bookmark carries no explicit color.
pub const DEFAULT_COLOR: &str = "#FFFFFF";

/// Swatches and card backgrounds render at this fixed alpha.
pub const SWATCH_ALPHA: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontColor {
    Light,
    Dark,
}

/// Position of `color` in the palette, matching its uppercase form.
/// Case-sensitive against the uppercase palette by construction.
pub fn palette_index(color: &str) -> Option<usize> {
    let upper = color.to_uppercase();
    PALETTE.iter().position(|c| *c == upper)
}

/// Card font color for a given background.
///
/// Index rule, not perceptual luminance: dark font when the color sits past
/// the palette midpoint (the pastel half) or equals the default background.
/// Colors outside the palette get the light font.
pub fn font_color(background: Option<&str>) -> FontColor {
    let color = background.unwrap_or(DEFAULT_COLOR);
    if color == DEFAULT_COLOR {
        return FontColor::Dark;
    }
    match palette_index(color) {
        Some(index) if index > PALETTE.len() / 2 => FontColor::Dark,
        _ => FontColor::Light,
    }
}

/// Renders a `#RRGGBB` color as an `rgba(...)` string at the swatch alpha.
/// Returns `None` for anything that is not a six-digit hex color.
pub fn swatch_rgba(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(format!("rgba({}, {}, {}, {})", r, g, b, SWATCH_ALPHA))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_first_half_color_when_font_color_then_light() {
        assert_eq!(font_color(Some("#FCCB00")), FontColor::Light);
        assert_eq!(font_color(Some("#B80000")), FontColor::Light);
    }

    #[test]
    fn given_pastel_half_color_when_font_color_then_dark() {
        assert_eq!(font_color(Some("#FAD0C3")), FontColor::Dark);
        assert_eq!(font_color(Some("#D4C4FB")), FontColor::Dark);
    }

    #[test]
    fn given_midpoint_color_when_font_color_then_light() {
        // Index 8 does not exceed half the palette length.
        assert_eq!(palette_index("#EB9694"), Some(8));
        assert_eq!(font_color(Some("#EB9694")), FontColor::Light);
    }

    #[test]
    fn given_default_or_missing_color_when_font_color_then_dark() {
        assert_eq!(font_color(Some(DEFAULT_COLOR)), FontColor::Dark);
        assert_eq!(font_color(None), FontColor::Dark);
    }

    #[test]
    fn given_unknown_color_when_font_color_then_light() {
        assert_eq!(font_color(Some("#123456")), FontColor::Light);
    }

    #[test]
    fn given_lowercase_color_when_palette_index_then_matches_uppercase_form() {
        assert_eq!(palette_index("#fccb00"), Some(2));
        assert_eq!(font_color(Some("#d4c4fb")), FontColor::Dark);
    }

    #[test]
    fn given_palette_color_when_swatch_rgba_then_fixed_alpha() {
        assert_eq!(
            swatch_rgba("#FCCB00").as_deref(),
            Some("rgba(252, 203, 0, 0.8)")
        );
    }

    #[test]
    fn given_malformed_color_when_swatch_rgba_then_none() {
        assert_eq!(swatch_rgba("FCCB00"), None);
        assert_eq!(swatch_rgba("#FCB"), None);
        assert_eq!(swatch_rgba("#GGGGGG"), None);
    }
}
