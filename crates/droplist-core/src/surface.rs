//! Drawing surface abstraction implemented by the embedding renderer.

use crate::color::Color;
use crate::geometry::{Point, Rect, Size};

/// Identifier for a sprite owned by the embedding renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(pub u32);

/// Identifier for a palette remap applied when drawing a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteId(pub u32);

impl PaletteId {
    /// The identity palette, drawing the sprite with its own colors.
    pub const NONE: Self = Self(0);
}

/// Drawing and measurement operations the menu core needs from its host.
///
/// The core never draws directly. It describes rows through these calls
/// and lets the embedding renderer rasterize them, so the same menu
/// logic works against any backend.
pub trait DrawSurface {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a line of text inside `rect`, clipped to it.
    fn draw_text(&mut self, rect: Rect, text: &str, color: Color);

    /// Draw a straight line between two points.
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Draw a sprite at `pos` with the given palette remap.
    fn draw_sprite(&mut self, sprite: SpriteId, palette: PaletteId, pos: Point);

    /// Measure the rendered width of `text` in the current font.
    fn measure_text(&self, text: &str) -> f32;

    /// Height of one line of text in the current font.
    fn line_height(&self) -> f32;

    /// Native size of a sprite.
    fn sprite_size(&self, sprite: SpriteId) -> Size;
}
