//! Foundational types and collaborator interfaces for the droplist menu core.
//!
//! This crate defines the small vocabulary shared between the menu core
//! and its embedding application: 2D geometry, colors, string
//! identifiers with deferred resolution, and the traits the application
//! implements to supply drawing, text, and window services.
//!
//! The menu logic itself lives in the `droplist` crate. Keeping the
//! collaborator seams here lets a renderer or host implement them
//! without depending on the widget code.

pub mod color;
pub mod geometry;
pub mod strings;
pub mod surface;
pub mod window;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use strings::{Param, ParamList, StringId, StringResolver};
pub use surface::{DrawSurface, PaletteId, SpriteId};
pub use window::{ButtonId, DropdownOwner, FocusSync, PopupHost};
