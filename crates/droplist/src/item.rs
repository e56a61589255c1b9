//! Dropdown item variants and the capability trait they share.
//!
//! Every row in a dropdown is a boxed [`ListItem`]. The trait carries the
//! per-row capabilities the session needs: the result code to report on
//! selection, whether the row can be selected at all, how tall and wide
//! it wants to be, and how to paint itself. Concrete variants cover
//! separators, translated strings with late-bound parameters, literal
//! text, and icon-plus-text rows.

use droplist_core::{
    Color, DrawSurface, PaletteId, ParamList, Point, Rect, Size, SpriteId, StringId,
    StringResolver,
};

use crate::style::DropdownStyle;

// ============================================================================
// Contexts
// ============================================================================

/// Collaborators available while measuring items.
pub struct MeasureContext<'a> {
    /// Font and sprite metrics.
    pub surface: &'a dyn DrawSurface,
    /// String resolution.
    pub strings: &'a dyn StringResolver,
    /// Paddings and row metrics.
    pub style: &'a DropdownStyle,
}

/// Collaborators available while painting items.
pub struct PaintContext<'a> {
    /// Drawing operations.
    pub surface: &'a mut dyn DrawSurface,
    /// String resolution.
    pub strings: &'a dyn StringResolver,
    /// Colors and paddings.
    pub style: &'a DropdownStyle,
}

// ============================================================================
// ListItem trait
// ============================================================================

/// A single row of a dropdown list.
///
/// Implementations are owned by the list through `Box<dyn ListItem>` and
/// queried by the session for layout, hit-testing, and painting. For a
/// fixed width, `height` must always return the same value; the session
/// measures each row once and reuses that layout for the whole session.
pub trait ListItem {
    /// Caller-defined result code, reported verbatim on selection.
    fn result(&self) -> i32;

    /// Whether the row is masked: still rendered, but never selectable
    /// or highlightable. The session combines this with [`selectable`]
    /// when deciding interactivity.
    ///
    /// [`selectable`]: ListItem::selectable
    fn masked(&self) -> bool;

    /// Whether the row can be selected at all. Separators return false.
    fn selectable(&self) -> bool {
        false
    }

    /// Height of the row when laid out at `width`.
    fn height(&self, ctx: &MeasureContext<'_>, width: f32) -> f32 {
        let _ = width;
        ctx.surface.line_height()
    }

    /// Natural width of the row. Zero means "use the list-wide maximum".
    fn width(&self, ctx: &MeasureContext<'_>) -> f32 {
        let _ = ctx;
        0.0
    }

    /// Paint the row into `rect`. `selected` marks the highlighted row;
    /// `bg` is the session background the row should fill when it is
    /// not highlighted.
    fn draw(&self, ctx: &mut PaintContext<'_>, rect: Rect, selected: bool, bg: Color);

    /// Resolved display text, or `None` for rows without text.
    fn display_text(&self, strings: &dyn StringResolver) -> Option<String> {
        let _ = strings;
        None
    }
}

/// Fill the row and draw its text, honoring highlight and mask colors.
fn paint_text_row(
    ctx: &mut PaintContext<'_>,
    rect: Rect,
    text: &str,
    text_left: f32,
    selected: bool,
    masked: bool,
    colour: Option<Color>,
    bg: Color,
) {
    let fill = if selected { ctx.style.highlight_color } else { bg };
    ctx.surface.fill_rect(rect, fill);

    let text_colour = if masked {
        ctx.style.masked_text_color
    } else if selected {
        ctx.style.highlight_text_color
    } else {
        colour.unwrap_or(ctx.style.text_color)
    };
    let text_rect = Rect::new(
        text_left,
        rect.top(),
        rect.right() - ctx.style.horizontal_padding - text_left,
        rect.height(),
    );
    ctx.surface.draw_text(text_rect, text, text_colour);
}

// ============================================================================
// SeparatorItem
// ============================================================================

/// A horizontal divider between groups of rows. Never selectable.
#[derive(Debug, Clone)]
pub struct SeparatorItem {
    result: i32,
    masked: bool,
}

impl SeparatorItem {
    /// Create a separator. `result` is kept for symmetry but never
    /// reported, since separators cannot be selected.
    pub fn new(result: i32) -> Self {
        Self {
            result,
            masked: false,
        }
    }

    /// Mark the separator as masked.
    pub fn with_masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }
}

impl ListItem for SeparatorItem {
    fn result(&self) -> i32 {
        self.result
    }

    fn masked(&self) -> bool {
        self.masked
    }

    fn height(&self, ctx: &MeasureContext<'_>, _width: f32) -> f32 {
        ctx.style.separator_height
    }

    fn draw(&self, ctx: &mut PaintContext<'_>, rect: Rect, _selected: bool, bg: Color) {
        ctx.surface.fill_rect(rect, bg);
        let y = rect.center().y;
        let inset = ctx.style.horizontal_padding;
        ctx.surface.draw_line(
            Point::new(rect.left() + inset, y),
            Point::new(rect.right() - inset, y),
            ctx.style.separator_color,
        );
    }
}

// ============================================================================
// StringItem
// ============================================================================

/// A selectable row showing a translated string.
#[derive(Debug, Clone)]
pub struct StringItem {
    string: StringId,
    result: i32,
    masked: bool,
    colour: Option<Color>,
}

impl StringItem {
    /// Create a string row reporting `result` when selected.
    pub fn new(string: StringId, result: i32) -> Self {
        Self {
            string,
            result,
            masked: false,
            colour: None,
        }
    }

    /// Mark the row as masked.
    pub fn with_masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Override the text color, replacing the style's normal color.
    pub fn with_colour(mut self, colour: Color) -> Self {
        self.colour = Some(colour);
        self
    }

    /// Override the text color in place.
    pub fn set_colour(&mut self, colour: Color) {
        self.colour = Some(colour);
    }

    /// The string identifier this row displays.
    pub fn string_id(&self) -> StringId {
        self.string
    }
}

impl ListItem for StringItem {
    fn result(&self) -> i32 {
        self.result
    }

    fn masked(&self) -> bool {
        self.masked
    }

    fn selectable(&self) -> bool {
        true
    }

    fn width(&self, ctx: &MeasureContext<'_>) -> f32 {
        let text = ctx.strings.resolve(self.string, &ParamList::new());
        ctx.surface.measure_text(&text) + ctx.style.horizontal_padding * 2.0
    }

    fn draw(&self, ctx: &mut PaintContext<'_>, rect: Rect, selected: bool, bg: Color) {
        let text = ctx.strings.resolve(self.string, &ParamList::new());
        let text_left = rect.left() + ctx.style.horizontal_padding;
        paint_text_row(
            ctx,
            rect,
            &text,
            text_left,
            selected,
            self.masked,
            self.colour,
            bg,
        );
    }

    fn display_text(&self, strings: &dyn StringResolver) -> Option<String> {
        Some(strings.resolve(self.string, &ParamList::new()))
    }
}

// ============================================================================
// ParamStringItem
// ============================================================================

/// A string row with substitution parameters resolved at measure and
/// draw time, so parameter changes after construction still show up.
#[derive(Debug, Clone)]
pub struct ParamStringItem {
    string: StringId,
    params: ParamList,
    result: i32,
    masked: bool,
    colour: Option<Color>,
}

impl ParamStringItem {
    /// Create a parameterized string row reporting `result` on selection.
    pub fn new(string: StringId, result: i32) -> Self {
        Self {
            string,
            params: ParamList::new(),
            result,
            masked: false,
            colour: None,
        }
    }

    /// Mark the row as masked.
    pub fn with_masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Override the text color.
    pub fn with_colour(mut self, colour: Color) -> Self {
        self.colour = Some(colour);
        self
    }

    /// Store a numeric parameter.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`ParamList::SLOTS`].
    pub fn set_param(&mut self, index: usize, value: u64) {
        self.params.set_int(index, value);
    }

    /// Store a textual parameter.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`ParamList::SLOTS`].
    pub fn set_param_str(&mut self, index: usize, text: impl Into<String>) {
        self.params.set_text(index, text);
    }

    /// The string identifier this row displays.
    pub fn string_id(&self) -> StringId {
        self.string
    }

    fn resolve(&self, strings: &dyn StringResolver) -> String {
        strings.resolve(self.string, &self.params)
    }
}

impl ListItem for ParamStringItem {
    fn result(&self) -> i32 {
        self.result
    }

    fn masked(&self) -> bool {
        self.masked
    }

    fn selectable(&self) -> bool {
        true
    }

    fn width(&self, ctx: &MeasureContext<'_>) -> f32 {
        let text = self.resolve(ctx.strings);
        ctx.surface.measure_text(&text) + ctx.style.horizontal_padding * 2.0
    }

    fn draw(&self, ctx: &mut PaintContext<'_>, rect: Rect, selected: bool, bg: Color) {
        let text = self.resolve(ctx.strings);
        let text_left = rect.left() + ctx.style.horizontal_padding;
        paint_text_row(
            ctx,
            rect,
            &text,
            text_left,
            selected,
            self.masked,
            self.colour,
            bg,
        );
    }

    fn display_text(&self, strings: &dyn StringResolver) -> Option<String> {
        Some(self.resolve(strings))
    }
}

// ============================================================================
// RawTextItem
// ============================================================================

/// A row showing literal text that bypasses translation entirely.
///
/// Internally this is a parameterized row on [`StringId::RAW_TEXT`] with
/// the payload in parameter slot 0; resolvers return that slot verbatim.
#[derive(Debug, Clone)]
pub struct RawTextItem {
    params: ParamList,
    text: String,
    result: i32,
    masked: bool,
    colour: Option<Color>,
}

impl RawTextItem {
    /// Create a literal-text row reporting `result` on selection.
    pub fn new(text: impl Into<String>, result: i32) -> Self {
        let text = text.into();
        let mut params = ParamList::new();
        params.set_text(0, text.clone());
        Self {
            params,
            text,
            result,
            masked: false,
            colour: None,
        }
    }

    /// Mark the row as masked.
    pub fn with_masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Override the text color.
    pub fn with_colour(mut self, colour: Color) -> Self {
        self.colour = Some(colour);
        self
    }

    /// The literal text payload.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn resolve(&self, strings: &dyn StringResolver) -> String {
        strings.resolve(StringId::RAW_TEXT, &self.params)
    }
}

impl ListItem for RawTextItem {
    fn result(&self) -> i32 {
        self.result
    }

    fn masked(&self) -> bool {
        self.masked
    }

    fn selectable(&self) -> bool {
        true
    }

    fn width(&self, ctx: &MeasureContext<'_>) -> f32 {
        let text = self.resolve(ctx.strings);
        ctx.surface.measure_text(&text) + ctx.style.horizontal_padding * 2.0
    }

    fn draw(&self, ctx: &mut PaintContext<'_>, rect: Rect, selected: bool, bg: Color) {
        let text = self.resolve(ctx.strings);
        let text_left = rect.left() + ctx.style.horizontal_padding;
        paint_text_row(
            ctx,
            rect,
            &text,
            text_left,
            selected,
            self.masked,
            self.colour,
            bg,
        );
    }

    fn display_text(&self, strings: &dyn StringResolver) -> Option<String> {
        Some(self.resolve(strings))
    }
}

// ============================================================================
// IconItem
// ============================================================================

/// A row showing a sprite followed by parameterized text.
#[derive(Debug, Clone)]
pub struct IconItem {
    sprite: SpriteId,
    palette: PaletteId,
    string: StringId,
    params: ParamList,
    result: i32,
    masked: bool,
    dim: Option<Size>,
}

impl IconItem {
    /// Create an icon row reporting `result` on selection.
    pub fn new(sprite: SpriteId, palette: PaletteId, string: StringId, result: i32) -> Self {
        Self {
            sprite,
            palette,
            string,
            params: ParamList::new(),
            result,
            masked: false,
            dim: None,
        }
    }

    /// Mark the row as masked.
    pub fn with_masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    /// Pin the icon bounding box, overriding the sprite's native size.
    /// Callers use this to align icon columns across rows whose sprites
    /// differ in size.
    pub fn set_dimension(&mut self, dim: Size) {
        self.dim = Some(dim);
    }

    /// Store a numeric parameter.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`ParamList::SLOTS`].
    pub fn set_param(&mut self, index: usize, value: u64) {
        self.params.set_int(index, value);
    }

    /// Store a textual parameter.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`ParamList::SLOTS`].
    pub fn set_param_str(&mut self, index: usize, text: impl Into<String>) {
        self.params.set_text(index, text);
    }

    fn icon_size(&self, surface: &dyn DrawSurface) -> Size {
        self.dim.unwrap_or_else(|| surface.sprite_size(self.sprite))
    }

    fn resolve(&self, strings: &dyn StringResolver) -> String {
        strings.resolve(self.string, &self.params)
    }
}

impl ListItem for IconItem {
    fn result(&self) -> i32 {
        self.result
    }

    fn masked(&self) -> bool {
        self.masked
    }

    fn selectable(&self) -> bool {
        true
    }

    fn height(&self, ctx: &MeasureContext<'_>, _width: f32) -> f32 {
        let icon = self.icon_size(ctx.surface);
        icon.height.max(ctx.surface.line_height()) + ctx.style.vertical_padding * 2.0
    }

    fn width(&self, ctx: &MeasureContext<'_>) -> f32 {
        let icon = self.icon_size(ctx.surface);
        let text = self.resolve(ctx.strings);
        icon.width
            + ctx.style.icon_gap
            + ctx.surface.measure_text(&text)
            + ctx.style.horizontal_padding * 2.0
    }

    fn draw(&self, ctx: &mut PaintContext<'_>, rect: Rect, selected: bool, bg: Color) {
        let icon = self.icon_size(ctx.surface);
        let text = self.resolve(ctx.strings);
        let icon_left = rect.left() + ctx.style.horizontal_padding;
        let text_left = icon_left + icon.width + ctx.style.icon_gap;
        paint_text_row(ctx, rect, &text, text_left, selected, self.masked, None, bg);
        let icon_top = rect.top() + (rect.height() - icon.height) / 2.0;
        ctx.surface
            .draw_sprite(self.sprite, self.palette, Point::new(icon_left, icon_top));
    }

    fn display_text(&self, strings: &dyn StringResolver) -> Option<String> {
        Some(self.resolve(strings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use droplist_core::Param;

    struct FakeResolver;

    impl StringResolver for FakeResolver {
        fn resolve(&self, id: StringId, params: &ParamList) -> String {
            if id == StringId::RAW_TEXT {
                return match params.get(0) {
                    Param::Text(text) => text.clone(),
                    Param::Int(_) => String::new(),
                };
            }
            let mut out = format!("str{}", id.0);
            for param in params.as_slice() {
                match param {
                    Param::Int(0) => {}
                    Param::Int(value) => out.push_str(&format!(" {value}")),
                    Param::Text(text) => out.push_str(&format!(" {text}")),
                }
            }
            out
        }
    }

    #[derive(Default)]
    struct FakeSurface {
        ops: Vec<String>,
    }

    impl DrawSurface for FakeSurface {
        fn fill_rect(&mut self, rect: Rect, _color: Color) {
            self.ops.push(format!("fill {},{}", rect.left(), rect.top()));
        }

        fn draw_text(&mut self, rect: Rect, text: &str, _color: Color) {
            self.ops
                .push(format!("text '{}' at {},{}", text, rect.left(), rect.top()));
        }

        fn draw_line(&mut self, from: Point, to: Point, _color: Color) {
            self.ops
                .push(format!("line {},{} -> {},{}", from.x, from.y, to.x, to.y));
        }

        fn draw_sprite(&mut self, sprite: SpriteId, _palette: PaletteId, pos: Point) {
            self.ops
                .push(format!("sprite {} at {},{}", sprite.0, pos.x, pos.y));
        }

        fn measure_text(&self, text: &str) -> f32 {
            text.chars().count() as f32 * 7.0
        }

        fn line_height(&self) -> f32 {
            12.0
        }

        fn sprite_size(&self, _sprite: SpriteId) -> Size {
            Size::new(16.0, 10.0)
        }
    }

    #[test]
    fn test_separator_is_not_selectable() {
        let item = SeparatorItem::new(-1);
        assert!(!item.selectable());
        assert!(!item.masked());
    }

    #[test]
    fn test_separator_height_comes_from_style() {
        let surface = FakeSurface::default();
        let style = DropdownStyle::default();
        let ctx = MeasureContext {
            surface: &surface,
            strings: &FakeResolver,
            style: &style,
        };
        let item = SeparatorItem::new(-1);
        assert_eq!(item.height(&ctx, 100.0), style.separator_height);
    }

    #[test]
    fn test_string_item_width_includes_padding() {
        let surface = FakeSurface::default();
        let style = DropdownStyle::default();
        let ctx = MeasureContext {
            surface: &surface,
            strings: &FakeResolver,
            style: &style,
        };
        let item = StringItem::new(StringId(3), 7);
        // "str3" is 4 chars at 7px each.
        assert_eq!(item.width(&ctx), 28.0 + style.horizontal_padding * 2.0);
        assert_eq!(item.height(&ctx, 100.0), surface.line_height());
    }

    #[test]
    fn test_param_string_item_late_binding() {
        let resolver = FakeResolver;
        let mut item = ParamStringItem::new(StringId(5), 1);
        assert_eq!(item.display_text(&resolver).as_deref(), Some("str5"));

        item.set_param(0, 42);
        item.set_param_str(1, "depot");
        assert_eq!(item.display_text(&resolver).as_deref(), Some("str5 42 depot"));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_param_string_item_slot_overflow_panics() {
        let mut item = ParamStringItem::new(StringId(5), 1);
        item.set_param(10, 1);
    }

    #[test]
    fn test_raw_text_item_resolves_verbatim() {
        let resolver = FakeResolver;
        let item = RawTextItem::new("Main St. 10", 2);
        assert_eq!(item.display_text(&resolver).as_deref(), Some("Main St. 10"));
        assert_eq!(item.text(), "Main St. 10");
    }

    #[test]
    fn test_icon_item_measures_icon_and_text() {
        let surface = FakeSurface::default();
        let style = DropdownStyle::default();
        let ctx = MeasureContext {
            surface: &surface,
            strings: &FakeResolver,
            style: &style,
        };
        let item = IconItem::new(SpriteId(9), PaletteId::NONE, StringId(3), 0);
        let expected_width =
            16.0 + style.icon_gap + 28.0 + style.horizontal_padding * 2.0;
        assert_eq!(item.width(&ctx), expected_width);
        // Icon is shorter than the text line here, so the line wins.
        assert_eq!(
            item.height(&ctx, 100.0),
            12.0 + style.vertical_padding * 2.0
        );
    }

    #[test]
    fn test_icon_item_set_dimension_overrides_sprite_size() {
        let surface = FakeSurface::default();
        let style = DropdownStyle::default();
        let ctx = MeasureContext {
            surface: &surface,
            strings: &FakeResolver,
            style: &style,
        };
        let mut item = IconItem::new(SpriteId(9), PaletteId::NONE, StringId(3), 0);
        item.set_dimension(Size::new(20.0, 20.0));
        assert_eq!(
            item.height(&ctx, 100.0),
            20.0 + style.vertical_padding * 2.0
        );
    }

    #[test]
    fn test_icon_item_draws_sprite_then_text() {
        let mut surface = FakeSurface::default();
        let style = DropdownStyle::default();
        let resolver = FakeResolver;
        let mut ctx = PaintContext {
            surface: &mut surface,
            strings: &resolver,
            style: &style,
        };
        let item = IconItem::new(SpriteId(9), PaletteId::NONE, StringId(3), 0);
        item.draw(
            &mut ctx,
            Rect::new(0.0, 0.0, 100.0, 14.0),
            false,
            Color::WHITE,
        );
        assert!(surface.ops.iter().any(|op| op.starts_with("sprite 9")));
        assert!(surface.ops.iter().any(|op| op.contains("'str3'")));
    }
}
