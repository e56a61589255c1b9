//! Color type shared with collaborating renderers.

use bytemuck::{Pod, Zeroable};

/// An RGBA color with premultiplied alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    ///
    /// Note: This expects premultiplied alpha. Use [`from_rgba`](Self::from_rgba)
    /// for non-premultiplied input.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from non-premultiplied RGBA components.
    #[inline]
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r * a,
            g: g * a,
            b: b * a,
            a,
        }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);

    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);

    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Scale the color channels toward black, keeping alpha.
    ///
    /// `factor` of 1.0 returns the color unchanged, 0.0 returns black.
    #[inline]
    pub fn darken(&self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            a: self.a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb8() {
        let c = Color::from_rgb8(255, 0, 255);
        assert_eq!(c, Color::from_rgb(1.0, 0.0, 1.0));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_from_rgba_premultiplies() {
        let c = Color::from_rgba(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.r, 0.5);
        assert_eq!(c.g, 0.25);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn test_darken() {
        let c = Color::from_rgb(1.0, 0.8, 0.6).darken(0.5);
        assert_eq!(c, Color::from_rgb(0.5, 0.4, 0.3));
    }
}
