//! The popup session and its controlling state machine.
//!
//! A [`Dropdown`] controller owns at most one open [`DropdownSession`].
//! Showing a list measures every row once, places the popup relative to
//! its anchor, and hands the popup rectangle to the host; afterwards the
//! controller turns pointer events into highlight changes and selection
//! results until something closes the session. The owner hears about the
//! outcome through its [`DropdownOwner`] callbacks: `on_dropdown_select`
//! at most once, then `on_dropdown_close` exactly once.

use droplist_core::{ButtonId, Color, DropdownOwner, FocusSync, Point, PopupHost, Rect, Size};

use crate::item::{MeasureContext, PaintContext};
use crate::list::DropdownList;
use crate::placement;

/// State of one open dropdown: the owned list, its frozen row layout,
/// and the interaction flags the session was opened with.
pub struct DropdownSession {
    button: ButtonId,
    list: DropdownList,
    row_heights: Vec<f32>,
    popup: Rect,
    highlighted: Option<usize>,
    background: Color,
    instant_close: bool,
    sync_focus: FocusSync,
}

impl DropdownSession {
    /// The trigger widget this session reports back to.
    pub fn button(&self) -> ButtonId {
        self.button
    }

    /// The placed popup rectangle.
    pub fn popup_rect(&self) -> Rect {
        self.popup
    }

    /// Index of the highlighted row, if any.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Map a position to the row index under it.
    ///
    /// Rows stack from the popup's top edge with the heights frozen at
    /// open time, so every in-popup position resolves to at most one row.
    fn row_at(&self, pos: Point) -> Option<usize> {
        if !self.popup.contains(pos) {
            return None;
        }
        let mut top = self.popup.top();
        for (index, height) in self.row_heights.iter().enumerate() {
            let bottom = top + height;
            if pos.y < bottom {
                return Some(index);
            }
            top = bottom;
        }
        None
    }

    /// Whether the row at `index` reacts to the pointer.
    fn interactive(&self, index: usize) -> bool {
        self.list
            .get(index)
            .is_some_and(|item| item.selectable() && !item.masked())
    }
}

/// Controller for a dropdown trigger, owning at most one open session.
///
/// Embedding code keeps one `Dropdown` per owning window and routes that
/// window's pointer events here while a session is open.
#[derive(Default)]
pub struct Dropdown {
    session: Option<DropdownSession>,
}

impl Dropdown {
    /// Create a controller with no open session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session is currently open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&DropdownSession> {
        self.session.as_ref()
    }

    /// Open a dropdown anchored to an explicit rectangle.
    ///
    /// The popup is at least as wide as the anchor and as tall as its
    /// rows; it opens below the anchor, flipping above and clamping to
    /// the host's screen bounds as needed. `selected` pre-highlights the
    /// first interactive row with that result code. An already open
    /// session is closed first, with its close notification. An empty
    /// list degenerates to an immediate `on_dropdown_close` with no
    /// popup at all.
    #[allow(clippy::too_many_arguments)]
    pub fn show_at(
        &mut self,
        owner: &mut dyn DropdownOwner,
        host: &mut dyn PopupHost,
        ctx: &MeasureContext<'_>,
        list: DropdownList,
        selected: Option<i32>,
        button: ButtonId,
        anchor: Rect,
        background: Color,
        instant_close: bool,
        sync_focus: FocusSync,
    ) {
        if self.session.is_some() {
            tracing::debug!(
                target: "droplist::session",
                "Re-entrant show for button {}, closing previous session",
                button.0
            );
            self.close(owner, host);
        }

        if list.is_empty() {
            tracing::debug!(
                target: "droplist::session",
                "Empty list for button {}, closing immediately",
                button.0
            );
            owner.on_dropdown_close(button);
            return;
        }

        let width = list.max_width(ctx).max(anchor.width());
        let row_heights: Vec<f32> = list.iter().map(|item| item.height(ctx, width)).collect();
        let height: f32 = row_heights.iter().sum();
        let popup = placement::place(anchor, Size::new(width, height), host.screen_bounds());

        let highlighted = selected.and_then(|wanted| {
            list.iter().position(|item| {
                item.selectable() && !item.masked() && item.result() == wanted
            })
        });

        tracing::debug!(
            target: "droplist::session",
            "Opened dropdown for button {} with {} rows at {},{}",
            button.0,
            list.len(),
            popup.left(),
            popup.top()
        );
        host.open_popup(popup);
        if sync_focus.notify_on_receive {
            owner.on_focus_change(true);
        }

        self.session = Some(DropdownSession {
            button,
            list,
            row_heights,
            popup,
            highlighted,
            background,
            instant_close,
            sync_focus,
        });
    }

    /// Open a dropdown anchored to the trigger widget itself.
    ///
    /// The anchor comes from [`PopupHost::trigger_bounds`]; `min_width`
    /// widens the popup beyond the natural item width when the caller
    /// wants column alignment with neighboring widgets. The popup gets
    /// an opaque white background; use [`show_at`](Self::show_at) to
    /// pick another one.
    #[allow(clippy::too_many_arguments)]
    pub fn show(
        &mut self,
        owner: &mut dyn DropdownOwner,
        host: &mut dyn PopupHost,
        ctx: &MeasureContext<'_>,
        list: DropdownList,
        selected: Option<i32>,
        button: ButtonId,
        min_width: f32,
        instant_close: bool,
        sync_focus: FocusSync,
    ) {
        let mut anchor = host.trigger_bounds(button);
        if anchor.width() < min_width {
            anchor.size.width = min_width;
        }
        self.show_at(
            owner,
            host,
            ctx,
            list,
            selected,
            button,
            anchor,
            Color::WHITE,
            instant_close,
            sync_focus,
        );
    }

    /// Track the pointer and move the highlight to the interactive row
    /// under it.
    ///
    /// Redraw requests are suppressed while `instant_close` is set, since
    /// such sessions close before hover feedback would be visible; the
    /// highlight state itself still updates.
    pub fn pointer_moved(&mut self, host: &mut dyn PopupHost, pos: Point) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let hit = session
            .row_at(pos)
            .filter(|&index| session.interactive(index));
        if hit != session.highlighted {
            tracing::trace!(
                target: "droplist::session",
                "Hover moved from {:?} to {:?}",
                session.highlighted,
                hit
            );
            session.highlighted = hit;
            if !session.instant_close {
                host.request_redraw();
            }
        }
    }

    /// Handle a press. A press on an interactive row reports the row's
    /// result and closes; a press on a masked row or separator does
    /// nothing; a press outside the popup closes without a result.
    pub fn pointer_pressed(
        &mut self,
        owner: &mut dyn DropdownOwner,
        host: &mut dyn PopupHost,
        pos: Point,
    ) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        if !session.popup.contains(pos) {
            tracing::debug!(
                target: "droplist::session",
                "Press outside popup for button {}, closing",
                session.button.0
            );
            self.close(owner, host);
            return;
        }

        let Some(index) = session.row_at(pos) else {
            return;
        };
        if !session.interactive(index) {
            return;
        }

        let button = session.button;
        let result = match session.list.get(index) {
            Some(item) => item.result(),
            None => return,
        };
        tracing::debug!(
            target: "droplist::session",
            "Selected row {} (result {}) for button {}",
            index,
            result,
            button.0
        );
        owner.on_dropdown_select(button, result);
        self.close(owner, host);
    }

    /// Paint the open session: popup background, then each row at its
    /// frozen layout offset.
    pub fn draw(&self, ctx: &mut PaintContext<'_>) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        ctx.surface.fill_rect(session.popup, session.background);
        let mut top = session.popup.top();
        for (index, height) in session.row_heights.iter().enumerate() {
            let Some(item) = session.list.get(index) else {
                break;
            };
            let rect = Rect::new(session.popup.left(), top, session.popup.width(), *height);
            item.draw(ctx, rect, session.highlighted == Some(index), session.background);
            top += height;
        }
    }

    /// Close the open session, notifying the owner.
    ///
    /// Fires `on_focus_change(false)` first when the session asked for
    /// lose notifications, then `on_dropdown_close`. No-op when nothing
    /// is open.
    pub fn close(&mut self, owner: &mut dyn DropdownOwner, host: &mut dyn PopupHost) {
        if let Some(session) = self.session.take() {
            host.close_popup();
            if session.sync_focus.notify_on_lose {
                owner.on_focus_change(false);
            }
            owner.on_dropdown_close(session.button);
            tracing::debug!(
                target: "droplist::session",
                "Closed dropdown for button {}",
                session.button.0
            );
        }
    }

    /// Tear down the session when the owning window is gone.
    ///
    /// Releases the popup surface without touching the dead owner, so no
    /// callbacks fire.
    pub fn owner_destroyed(&mut self, host: &mut dyn PopupHost) {
        if let Some(session) = self.session.take() {
            tracing::debug!(
                target: "droplist::session",
                "Owner destroyed, closing dropdown for button {} without callbacks",
                session.button.0
            );
            host.close_popup();
        }
    }
}
