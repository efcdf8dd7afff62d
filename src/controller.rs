//! Transient interaction state (hover, drag, selection) and delegation of
//! every mutating action to the externally owned tab collection.
//!
//! The controller is defensively total: stale tab references, out-of-range
//! indices, duplicate drag starts, and a torn-down collection all degrade to
//! no-ops with unchanged state, never to panics. The tab list is re-read from
//! the live collection at the moment of each call because it can change
//! between a gesture starting and ending.

use egui::Vec2;

use crate::model::{
    CollectionHandle, FocusHandle, GroupId, Tab, TabCollection, TabGroup, TabId,
};
use crate::organizer::GroupResolver;
use crate::visual_state::fallback_group_color;

/// Interaction state machine for the tab strip.
///
/// Invariant: when `dragging` is false, `dragged_tab` is `None` and
/// `drag_offset` is zero.
pub struct TabBarController {
    hovered_tab: Option<TabId>,
    dragged_tab: Option<TabId>,
    dragging: bool,
    drag_offset: Vec2,
    collection: Option<CollectionHandle>,
    focus: Option<FocusHandle>,
}

impl TabBarController {
    /// Create a detached controller. Every operation is a no-op until
    /// [`attach`](Self::attach) provides the collaborators.
    pub fn new() -> Self {
        Self {
            hovered_tab: None,
            dragged_tab: None,
            dragging: false,
            drag_offset: Vec2::ZERO,
            collection: None,
            focus: None,
        }
    }

    /// Wire up the external collaborators. The controller keeps non-owning
    /// handles only.
    pub fn attach(&mut self, collection: CollectionHandle, focus: FocusHandle) {
        self.collection = Some(collection);
        self.focus = Some(focus);
    }

    // ========================================================================
    // Collection access
    // ========================================================================

    fn with_collection<R>(&self, f: impl FnOnce(&dyn TabCollection) -> R) -> Option<R> {
        let rc = self.collection.as_ref()?.upgrade()?;
        let collection = rc.borrow();
        Some(f(&*collection))
    }

    fn with_collection_mut<R>(&self, f: impl FnOnce(&mut dyn TabCollection) -> R) -> Option<R> {
        let rc = self.collection.as_ref()?.upgrade()?;
        let mut collection = rc.borrow_mut();
        Some(f(&mut *collection))
    }

    /// Snapshot of the tabs in canonical order; empty when the collection is
    /// gone.
    pub fn tabs(&self) -> Vec<Tab> {
        self.with_collection(|c| c.tabs().to_vec()).unwrap_or_default()
    }

    /// Number of tabs in the collection.
    pub fn tab_count(&self) -> usize {
        self.with_collection(|c| c.tabs().len()).unwrap_or(0)
    }

    /// Identifier of the current tab, if any.
    pub fn current_tab_id(&self) -> Option<TabId> {
        self.with_collection(|c| c.current_tab_id()).flatten()
    }

    // ========================================================================
    // Tab actions
    // ========================================================================

    /// Make `id` the current tab. Re-selecting the already-current tab also
    /// requests omnibox focus.
    pub fn select_tab(&mut self, id: TabId) {
        let Some(rc) = self.collection.as_ref().and_then(|c| c.upgrade()) else {
            return;
        };
        // Capture before delegating: the collection will report `id` as
        // current afterwards either way.
        let was_current = rc.borrow().current_tab_id() == Some(id);
        rc.borrow_mut().set_current_tab(id);
        log::debug!("tab strip: selected tab {id}");

        if was_current {
            if let Some(focus) = self.focus.as_ref().and_then(|f| f.upgrade()) {
                log::debug!("tab strip: re-selected current tab, requesting omnibox focus");
                focus.borrow_mut().request_omnibox_focus();
            }
        }
    }

    /// Close `id`, resolving its index against the live list. A tab no longer
    /// in the collection is a no-op: the list may have changed concurrently.
    /// Pinned tabs are closable from the strip.
    pub fn close_tab(&mut self, id: TabId) {
        let Some(rc) = self.collection.as_ref().and_then(|c| c.upgrade()) else {
            return;
        };
        let index = rc.borrow().tabs().iter().position(|t| t.id == id);
        match index {
            Some(index) => {
                log::debug!("tab strip: closing tab {id} at index {index}");
                rc.borrow_mut().close_tab_at(index, true);
            }
            None => {
                log::debug!("tab strip: close requested for unknown tab {id}, ignoring");
            }
        }
    }

    /// Pin `id`.
    pub fn pin_tab(&mut self, id: TabId) {
        self.with_collection_mut(|c| c.pin_tab(id));
    }

    /// Unpin `id`.
    pub fn unpin_tab(&mut self, id: TabId) {
        self.with_collection_mut(|c| c.unpin_tab(id));
    }

    /// Toggle a group's collapsed state.
    pub fn toggle_group(&mut self, id: GroupId) {
        log::debug!("tab strip: toggling group {id}");
        self.with_collection_mut(|c| c.toggle_group_collapse(id));
    }

    /// Move the tab at `from` to `to` in canonical order. `to == count` means
    /// move to the end. Equal or out-of-range indices are a silent no-op.
    pub fn move_tab(&mut self, from: usize, to: usize) {
        let Some(rc) = self.collection.as_ref().and_then(|c| c.upgrade()) else {
            return;
        };
        let count = rc.borrow().tabs().len();
        if from == to || from >= count || to > count {
            return;
        }
        log::debug!("tab strip: moving tab from {from} to {to}");
        rc.borrow_mut().move_list_item(from, to, None, false);
    }

    // ========================================================================
    // Hover
    // ========================================================================

    /// Set the hovered tab. At most one tab is hovered; a new value replaces
    /// any previous one.
    pub fn set_hovered(&mut self, id: Option<TabId>) {
        self.hovered_tab = id;
    }

    /// Whether `id` is the hovered tab.
    pub fn is_hovered(&self, id: TabId) -> bool {
        self.hovered_tab == Some(id)
    }

    /// The hovered tab, if any.
    pub fn hovered_tab(&self) -> Option<TabId> {
        self.hovered_tab
    }

    // ========================================================================
    // Drag
    // ========================================================================

    /// Begin dragging `id`. A no-op while another drag is in progress.
    /// Starting a drag also selects the tab.
    pub fn start_drag(&mut self, id: TabId) {
        if self.dragging {
            return;
        }
        log::debug!("tab strip: drag started for tab {id}");
        self.dragged_tab = Some(id);
        self.dragging = true;
        self.drag_offset = Vec2::ZERO;
        self.select_tab(id);
    }

    /// Record the absolute offset since drag start. A no-op when not
    /// dragging; each call overwrites the previous offset.
    pub fn update_drag(&mut self, offset: Vec2) {
        if !self.dragging {
            return;
        }
        self.drag_offset = offset;
    }

    /// Finish the drag and reset drag state. A no-op when not dragging.
    pub fn end_drag(&mut self) {
        if !self.dragging {
            return;
        }
        log::debug!("tab strip: drag ended");
        self.dragged_tab = None;
        self.dragging = false;
        self.drag_offset = Vec2::ZERO;
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The tab being dragged, if any.
    pub fn dragged_tab(&self) -> Option<TabId> {
        self.dragged_tab
    }

    /// Absolute drag offset since drag start; zero when not dragging.
    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Whether `id` is the current tab.
    pub fn is_active(&self, id: TabId) -> bool {
        self.current_tab_id() == Some(id)
    }

    /// The close affordance shows on hover, on the active tab, and always on
    /// the last remaining tab.
    pub fn should_show_close_button(&self, id: TabId) -> bool {
        self.is_hovered(id) || self.is_active(id) || self.tab_count() == 1
    }
}

impl Default for TabBarController {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupResolver for TabBarController {
    fn group_for_tab(&self, tab: &Tab) -> Option<TabGroup> {
        self.with_collection(|c| {
            c.groups()
                .iter()
                .find(|group| group.contains_tab(tab))
                .cloned()
        })
        .flatten()
    }

    fn group_color(&self, group: &TabGroup) -> [u8; 3] {
        group.color.unwrap_or_else(|| fallback_group_color(group.id))
    }
}
