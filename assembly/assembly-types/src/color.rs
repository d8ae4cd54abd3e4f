//! Part colors for the presentation walk.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hex string used for parts without an assigned color.
pub const DEFAULT_COLOR_HEX: &str = "#aaa";

/// An RGB color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Color {
    /// Create a color, clamping channels into `[0, 1]`.
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Format as a `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let byte = |x: f64| (255.0 * x).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::new(1.0, 0.0, 0.0).to_hex(), "#ff0000");
        assert_eq!(Color::new(0.0, 1.0, 1.0).to_hex(), "#00ffff");
    }

    #[test]
    fn test_channels_clamped() {
        let c = Color::new(2.0, -1.0, 0.5);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.to_hex(), "#ff0080");
    }
}
