use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const CARD_BACKGROUND: Color = Color::Rgb(0x1c, 0x1c, 0x1c);
pub const CARD_MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ACCEPT: Color = Color::Rgb(0x4a, 0xde, 0x80);
pub const REJECT: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Mixes `color` over `background`; `alpha` 0 keeps the background.
pub fn blend(color: Color, background: Color, alpha: f64) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (color, background) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| -> u8 {
                (f64::from(b) + (f64::from(a) - f64::from(b)) * alpha).round() as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if alpha >= 0.5 => color,
        _ => background,
    }
}
