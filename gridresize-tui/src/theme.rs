use crossterm::style::Color;
use palette::{IntoColor, Oklch, Srgb};

/// Colors used by the demo grid.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    /// Header cell whose border is armed for resizing.
    pub armed_bg: Color,
    pub guide: Color,
    pub status_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: oklch(0.18, 0.01, 260.0),
            text: oklch(0.92, 0.01, 260.0),
            muted: oklch(0.55, 0.02, 260.0),
            header_bg: oklch(0.32, 0.06, 260.0),
            header_fg: oklch(0.95, 0.02, 260.0),
            armed_bg: oklch(0.45, 0.12, 200.0),
            guide: oklch(0.78, 0.16, 75.0),
            status_bg: oklch(0.25, 0.03, 260.0),
        }
    }
}

fn oklch(l: f32, c: f32, h: f32) -> Color {
    let srgb: Srgb = Oklch::new(l, c, h).into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Color::Rgb { r, g, b }
}
