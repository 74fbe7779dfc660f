use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsla { h: f32, s: f32, l: f32, a: f32 },
}

impl Color {
    pub const fn rgba(rgb: [u8; 3], a: f32) -> Self {
        Color::Rgba {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Color::Hsla { h, s, l, a }
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }

    /// Same colour with a different alpha, clamped to `[0, 1]`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = alpha.clamp(0.0, 1.0);
        match self {
            Color::Rgba { r, g, b, .. } => Color::Rgba { r, g, b, a },
            Color::Hsla { h, s, l, .. } => Color::Hsla { h, s, l, a },
        }
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Color::Hsla { h, s, l, a } => write!(f, "hsla({:.1}, {}%, {}%, {})", h, s, l, a),
        }
    }
}
