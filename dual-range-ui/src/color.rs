//! Colors used by render scenes.

use bytemuck::{Pod, Zeroable};

/// A color with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new opaque `Color` from three `u8` values (red, green, blue).
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Formats the color as `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b),
            to_u8(self.a)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_formats_all_channels() {
        assert_eq!(Color::from_rgb_u8(0xfb, 0x8c, 0xc9).to_hex(), "#fb8cc9ff");
        assert_eq!(Color::from_rgba_u8(0, 0x10, 0xff, 0x80).to_hex(), "#0010ff80");
    }

    #[test]
    fn test_scene_colors_cast_to_vertex_data() {
        let colors = [
            Color::from_rgb_u8(0xcc, 0xcc, 0xcc),
            Color::from_rgba_u8(0xff, 0, 0, 0),
        ];
        let floats: &[f32] = bytemuck::cast_slice(&colors);
        assert_eq!(floats.len(), 8);
        assert_eq!(floats[3], 1.0);
        assert_eq!(&floats[4..], &[1.0, 0.0, 0.0, 0.0]);
    }
}
