//! Style configuration for dropdown appearance.

use droplist_core::Color;

/// Colors and metrics used when painting dropdown rows.
///
/// The background color of the popup itself is chosen per session by the
/// caller; everything else comes from here.
#[derive(Debug, Clone)]
pub struct DropdownStyle {
    /// Text color for normal rows.
    pub text_color: Color,
    /// Background fill for the highlighted row.
    pub highlight_color: Color,
    /// Text color for the highlighted row.
    pub highlight_text_color: Color,
    /// Text color for masked rows.
    pub masked_text_color: Color,
    /// Separator line color.
    pub separator_color: Color,
    /// Horizontal padding on each side of a row's content.
    pub horizontal_padding: f32,
    /// Vertical padding for rows taller than one text line.
    pub vertical_padding: f32,
    /// Height of a separator row.
    pub separator_height: f32,
    /// Gap between an icon and the text that follows it.
    pub icon_gap: f32,
}

impl Default for DropdownStyle {
    fn default() -> Self {
        Self {
            text_color: Color::BLACK,
            highlight_color: Color::from_rgb8(0, 120, 215),
            highlight_text_color: Color::WHITE,
            masked_text_color: Color::from_rgb8(128, 128, 128),
            separator_color: Color::from_rgb8(200, 200, 200),
            horizontal_padding: 8.0,
            vertical_padding: 2.0,
            separator_height: 9.0,
            icon_gap: 4.0,
        }
    }
}
