//! Anchored placement of the popup rectangle.

use droplist_core::{Rect, Size};

/// Place a popup of `size` relative to `anchor`, kept within `bounds`.
///
/// The popup opens below the anchor with left edges aligned. When its
/// bottom would overflow `bounds` it flips above the anchor instead.
/// The result is then clamped into `bounds` on both axes, so a popup
/// taller or wider than the screen pins to the top/left edge.
pub fn place(anchor: Rect, size: Size, bounds: Rect) -> Rect {
    let mut x = anchor.left();
    let mut y = anchor.bottom();

    // Flip above when the preferred position overflows the bottom.
    if y + size.height > bounds.bottom() {
        y = anchor.top() - size.height;
    }

    if x + size.width > bounds.right() {
        x = bounds.right() - size.width;
    }
    if x < bounds.left() {
        x = bounds.left();
    }
    if y + size.height > bounds.bottom() {
        y = bounds.bottom() - size.height;
    }
    if y < bounds.top() {
        y = bounds.top();
    }

    Rect::new(x, y, size.width, size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    #[test]
    fn test_place_below_when_it_fits() {
        let anchor = Rect::new(100.0, 100.0, 80.0, 20.0);
        let placed = place(anchor, Size::new(120.0, 200.0), SCREEN);
        assert_eq!(placed, Rect::new(100.0, 120.0, 120.0, 200.0));
    }

    #[test]
    fn test_place_flips_above_near_bottom() {
        let anchor = Rect::new(100.0, 500.0, 80.0, 20.0);
        let placed = place(anchor, Size::new(120.0, 200.0), SCREEN);
        assert_eq!(placed, Rect::new(100.0, 300.0, 120.0, 200.0));
    }

    #[test]
    fn test_place_clamps_right_edge() {
        let anchor = Rect::new(750.0, 100.0, 40.0, 20.0);
        let placed = place(anchor, Size::new(120.0, 200.0), SCREEN);
        assert_eq!(placed.right(), SCREEN.right());
        assert_eq!(placed.top(), 120.0);
    }

    #[test]
    fn test_place_oversized_pins_to_top() {
        let anchor = Rect::new(100.0, 300.0, 80.0, 20.0);
        let placed = place(anchor, Size::new(120.0, 700.0), SCREEN);
        assert_eq!(placed.top(), SCREEN.top());
    }
}
