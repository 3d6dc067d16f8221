//! Canonical color representation produced by the resolver.
//!
//! Channels are floating-point values in [0,1]. Hosts that store color
//! components in an indexed RGBA/U8 buffer (blue at index 0, green at 1,
//! red at 2, alpha at 3) consume the [`Color::components`] layout directly.

use serde::{Deserialize, Serialize};

/// A normalized RGBA color with each channel in the closed interval [0,1].
///
/// Built fresh by a decoder for each successful parse and immutable once
/// constructed. Alpha defaults to 1.0 (fully opaque) unless the source
/// grammar explicitly encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    /// Create a color with an explicit alpha channel.
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Create a fully opaque color (alpha = 1.0).
    pub fn opaque(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Channels in the host's component-storage order: `[blue, green, red, alpha]`.
    ///
    /// The original host stores RGBA/U8 components with blue at index 0 and
    /// red at index 2; setters expecting that layout take this array as-is.
    pub fn components(&self) -> [f32; 4] {
        [self.blue, self.green, self.red, self.alpha]
    }

    /// Render the RGB channels as six lowercase hex digits (`rrggbb`),
    /// rounding each channel to the nearest byte. Alpha is not encoded.
    pub fn to_hex(&self) -> String {
        format!(
            "{:02x}{:02x}{:02x}",
            channel_byte(self.red),
            channel_byte(self.green),
            channel_byte(self.blue)
        )
    }
}

/// Round a [0,1] channel to the nearest byte, clamping out-of-range values.
fn channel_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_defaults_alpha() {
        let c = Color::opaque(1.0, 0.5, 0.0);
        assert_eq!(c.alpha, 1.0);
    }

    #[test]
    fn test_components_storage_order() {
        let c = Color::new(1.0, 2.0 / 3.0, 0.0, 0.5);
        let components = c.components();
        assert_eq!(components[0], 0.0); // blue
        assert_eq!(components[1], 2.0 / 3.0); // green
        assert_eq!(components[2], 1.0); // red
        assert_eq!(components[3], 0.5); // alpha
    }

    #[test]
    fn test_to_hex() {
        let c = Color::opaque(1.0, 170.0 / 255.0, 0.0);
        assert_eq!(c.to_hex(), "ffaa00");
    }

    #[test]
    fn test_to_hex_clamps_out_of_range() {
        let c = Color::opaque(999.0 / 255.0, -0.5, 0.0);
        assert_eq!(c.to_hex(), "ff0000");
    }

    #[test]
    fn test_serde_round_trip() {
        let c = Color::new(0.25, 0.5, 0.75, 0.3);
        let json = serde_json::to_string(&c).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
