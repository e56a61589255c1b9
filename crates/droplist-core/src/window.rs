//! Owner and host interfaces connecting a dropdown to its window system.

use crate::geometry::Rect;

/// Identifier for the widget (button) that triggered a dropdown.
///
/// Opaque to the menu core. It is handed back to the owner in every
/// callback so the owner can tell which of its widgets the result
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(pub u32);

/// Which focus transitions the owning window wants to hear about while
/// a dropdown is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusSync {
    /// Notify the owner when the popup gains keyboard focus.
    pub notify_on_receive: bool,
    /// Notify the owner when the popup loses keyboard focus.
    pub notify_on_lose: bool,
}

impl FocusSync {
    /// No focus notifications.
    pub const NONE: Self = Self {
        notify_on_receive: false,
        notify_on_lose: false,
    };

    /// Notify only when focus is received.
    pub const RECEIVE: Self = Self {
        notify_on_receive: true,
        notify_on_lose: false,
    };

    /// Notify only when focus is lost.
    pub const LOSE: Self = Self {
        notify_on_receive: false,
        notify_on_lose: true,
    };

    /// Notify on both transitions.
    pub const ALL: Self = Self {
        notify_on_receive: true,
        notify_on_lose: true,
    };
}

/// Callbacks delivered to the window that opened a dropdown.
///
/// `on_dropdown_select` fires at most once per session, and always
/// before `on_dropdown_close`. `on_dropdown_close` fires exactly once
/// for every session that opened, regardless of how it ended.
pub trait DropdownOwner {
    /// A selectable row was chosen. `result` is the row's result value.
    fn on_dropdown_select(&mut self, button: ButtonId, result: i32);

    /// The dropdown session ended.
    fn on_dropdown_close(&mut self, button: ButtonId);

    /// Keyboard focus moved to (`gained` true) or away from
    /// (`gained` false) the popup, filtered by the session's
    /// [`FocusSync`] settings.
    fn on_focus_change(&mut self, gained: bool) {
        let _ = gained;
    }
}

/// Window-system services the menu core needs from its host.
pub trait PopupHost {
    /// Usable screen area in the shared coordinate space, used to keep
    /// the popup on screen.
    fn screen_bounds(&self) -> Rect;

    /// Bounds of the trigger widget, used to anchor the popup when the
    /// caller does not supply an explicit position.
    fn trigger_bounds(&self, button: ButtonId) -> Rect;

    /// A popup surface covering `rect` is now needed.
    fn open_popup(&mut self, rect: Rect);

    /// The popup surface is no longer needed.
    fn close_popup(&mut self);

    /// The popup contents changed and should be repainted.
    fn request_redraw(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_sync_presets() {
        assert_eq!(FocusSync::default(), FocusSync::NONE);
        assert!(FocusSync::RECEIVE.notify_on_receive);
        assert!(!FocusSync::RECEIVE.notify_on_lose);
        assert!(FocusSync::LOSE.notify_on_lose);
        assert!(FocusSync::ALL.notify_on_receive && FocusSync::ALL.notify_on_lose);
    }
}
