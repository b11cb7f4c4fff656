use serde::{Deserialize, Serialize};
use std::fmt;

/// CSS-style colour: channels on a 0..255 scale (not clamped), alpha in 0..1.
///
/// Channels are kept unclamped so the generated values match the formulas
/// exactly; clamping only happens when a pixel is produced.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0] as f64, rgb[1] as f64, rgb[2] as f64, 1.0)
    }

    /// `rgba(r, g, b, a)` with every number written to two decimals.
    pub fn css_fixed(&self) -> String {
        format!(
            "rgba({:.2}, {:.2}, {:.2}, {:.2})",
            self.r + 0.0,
            self.g + 0.0,
            self.b + 0.0,
            self.a + 0.0
        )
    }

    /// Clamped 8-bit channels plus alpha as a 0..1 weight.
    pub fn to_pixel(&self) -> ([u8; 3], f64) {
        let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        (
            [channel(self.r), channel(self.g), channel(self.b)],
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Linear blend towards `other`; `t = 0` keeps `self`.
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

/// Shortest round-trip form, e.g. `rgba(255, 12, 0, 0.8)`.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r + 0.0,
            self.g + 0.0,
            self.b + 0.0,
            self.a + 0.0
        )
    }
}
