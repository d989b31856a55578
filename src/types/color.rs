//! Color value type and HSV conversion.

use std::fmt;

/// An RGBA color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create an opaque gray with all three channels set to `w`.
    pub const fn white(w: u8, a: u8) -> Self {
        Self::new(w, w, w, a)
    }

    /// Create a color from a slice of 3 (RGB) or 4 (RGBA) components.
    ///
    /// Returns `None` for any other length.
    pub fn from_bytes(components: &[u8]) -> Option<Self> {
        match *components {
            [r, g, b] => Some(Self::rgb(r, g, b)),
            [r, g, b, a] => Some(Self::new(r, g, b, a)),
            _ => None,
        }
    }

    /// Create a color from HSV components.
    ///
    /// `hue` is in degrees and is folded into [0, 360) first, so negative
    /// values and 360 itself wrap around. Saturation and value are byte
    /// fractions (255 = 1.0). Channels round half away from zero.
    pub fn from_hsv(hue: i32, saturation: u8, value: u8, alpha: u8) -> Self {
        let degrees = (hue % 360).abs();

        let s = f64::from(saturation) / 255.0;
        let v = f64::from(value) / 255.0;
        let c = s * v;
        let x = c * (1.0 - ((f64::from(degrees) / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match degrees / 60 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::new(
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
            alpha,
        )
    }

    /// Check if the color is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}
