//! Paragraph styles and the DroPiPeche stylesheet.

/// An RGB color with components in `[0, 1]`, as PDF `rg`/`RG` operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    /// Parse `#RRGGBB`; malformed input yields black.
    pub fn hex(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Color::BLACK;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .unwrap_or(0.0)
        };
        Color {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        }
    }
}

/// Which of the two document fonts a style uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Regular,
    Bold,
}

#[derive(Debug, Clone)]
pub struct ParagraphStyle {
    pub font: FontRole,
    pub size: f32,
    pub leading: f32,
    pub color: Color,
    pub space_before: f32,
    pub left_indent: f32,
    pub bullet_indent: f32,
}

impl ParagraphStyle {
    fn new(font: FontRole, size: f32, leading: f32, color: Color) -> Self {
        Self {
            font,
            size,
            leading,
            color,
            space_before: 0.0,
            left_indent: 0.0,
            bullet_indent: 0.0,
        }
    }
}

/// The named styles shared by the three report documents.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub title: ParagraphStyle,
    pub subtitle: ParagraphStyle,
    pub section: ParagraphStyle,
    pub body: ParagraphStyle,
    pub bullet: ParagraphStyle,
    pub rule_color: Color,
}

impl StyleSheet {
    /// Stylesheet used by the status report and the markdown note.
    pub fn dropipeche() -> Self {
        let ink = Color::hex("#0B1A2B");
        let body_ink = Color::hex("#1E2A38");

        let mut section = ParagraphStyle::new(FontRole::Bold, 12.5, 16.0, ink);
        section.space_before = 6.0;

        let mut bullet = ParagraphStyle::new(FontRole::Regular, 10.5, 14.0, body_ink);
        bullet.left_indent = 10.0;
        bullet.bullet_indent = 4.0;

        Self {
            title: ParagraphStyle::new(FontRole::Bold, 22.0, 26.0, ink),
            subtitle: ParagraphStyle::new(FontRole::Regular, 11.0, 14.0, Color::hex("#3D4B5C")),
            section,
            body: ParagraphStyle::new(FontRole::Regular, 10.5, 14.0, body_ink),
            bullet,
            rule_color: Color::hex("#D5DBE3"),
        }
    }

    /// Same sheet with the smaller title used by the planning document.
    pub fn planning() -> Self {
        let mut styles = Self::dropipeche();
        styles.title.size = 20.0;
        styles.title.leading = 24.0;
        styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hex_parsing() {
        let c = Color::hex("#FF8000");
        assert!((c.r - 1.0).abs() < 0.001);
        assert!((c.g - 0.502).abs() < 0.001);
        assert!((c.b - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_malformed_hex_is_black() {
        assert_eq!(Color::hex("#ZZZ"), Color::BLACK);
        assert_eq!(Color::hex(""), Color::BLACK);
    }

    #[test]
    fn test_stylesheets_differ_only_in_title_size() {
        let status = StyleSheet::dropipeche();
        let planning = StyleSheet::planning();
        assert_eq!(status.title.size, 22.0);
        assert_eq!(planning.title.size, 20.0);
        assert_eq!(planning.body.size, status.body.size);
    }
}
