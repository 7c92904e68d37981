//! Background styling derived from a record's presentation fields.

use invites_core::BackgroundTheme;

/// Inline CSS for a screen background.
///
/// Gradients blend the color into a translucent copy of itself; solid and
/// pattern use the flat color (pattern texture comes from the stylesheet).
pub fn background_style(theme: BackgroundTheme, color: &str) -> String {
    match theme {
        BackgroundTheme::Gradient => {
            format!("background: linear-gradient(135deg, {color}, {color}dd);")
        }
        BackgroundTheme::Solid | BackgroundTheme::Pattern => {
            format!("background: {color};")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_blends_the_color() {
        let style = background_style(BackgroundTheme::Gradient, "#ff91af");
        assert!(style.contains("linear-gradient"));
        assert!(style.contains("#ff91afdd"));
    }

    #[test]
    fn solid_uses_flat_color() {
        assert_eq!(
            background_style(BackgroundTheme::Solid, "#2d2d2d"),
            "background: #2d2d2d;"
        );
    }
}
