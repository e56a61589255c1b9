//! A polymorphic drop-down menu core with host-supplied rendering.
//!
//! `droplist` turns a list of heterogeneous items into a transient popup
//! that reports the selected item's result code back to its owner. It
//! owns the item model, natural-order sorting, popup placement, and the
//! hit-testing state machine; drawing, string resolution, and window
//! management stay with the embedding application behind the traits in
//! [`droplist_core`].
//!
//! # Example
//!
//! ```no_run
//! use droplist::item::StringItem;
//! use droplist::list::DropdownList;
//! use droplist::session::Dropdown;
//! use droplist_core::StringId;
//!
//! let mut list = DropdownList::new();
//! list.push(Box::new(StringItem::new(StringId(100), 0)));
//! list.push(Box::new(StringItem::new(StringId(101), 1)));
//!
//! let mut dropdown = Dropdown::new();
//! // dropdown.show(&mut owner, &mut host, &ctx, list, None, button,
//! //               0.0, false, droplist_core::FocusSync::NONE);
//! ```

pub mod item;
pub mod list;
pub mod natural;
pub mod placement;
pub mod session;
pub mod style;

pub use droplist_core::{
    ButtonId, Color, DrawSurface, DropdownOwner, FocusSync, PaletteId, Param, ParamList, Point,
    PopupHost, Rect, Size, SpriteId, StringId, StringResolver,
};

pub use item::{
    IconItem, ListItem, MeasureContext, PaintContext, ParamStringItem, RawTextItem, SeparatorItem,
    StringItem,
};
pub use list::DropdownList;
pub use natural::{NaturalOrder, NaturalOrderError};
pub use session::{Dropdown, DropdownSession};
pub use style::DropdownStyle;
