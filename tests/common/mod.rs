//! Shared integration test helpers for tab-strip.
//!
//! Provides canonical factory functions, an in-memory tab collection, and
//! recording collaborators used across the `tests/` integration suite.
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#![allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tab_strip::controller::TabBarController;
use tab_strip::model::{
    CollectionHandle, FocusHandle, FocusRequester, GroupId, PageId, Tab, TabCollection, TabGroup,
    TabId,
};
use tab_strip::organizer::GroupResolver;
use tab_strip::visual_state::fallback_group_color;

/// Build a tab with the given title and fresh identifiers.
pub fn tab(title: &str) -> Tab {
    Tab::new(title)
}

/// Build a pinned tab.
pub fn pinned_tab(title: &str) -> Tab {
    let mut tab = Tab::new(title);
    tab.pinned = true;
    tab
}

/// In-memory `TabCollection` that applies requests and records them for
/// assertions.
#[derive(Default)]
pub struct InMemoryCollection {
    pub tabs: Vec<Tab>,
    pub groups: Vec<TabGroup>,
    pub current: Option<TabId>,
    /// Recorded `(index, allow_closing_pinned)` close requests.
    pub close_requests: Vec<(usize, bool)>,
    /// Recorded `(from, to)` move requests.
    pub move_requests: Vec<(usize, usize)>,
    pub pin_requests: Vec<TabId>,
    pub unpin_requests: Vec<TabId>,
}

impl InMemoryCollection {
    pub fn with_tabs(tabs: Vec<Tab>) -> Self {
        Self {
            tabs,
            ..Self::default()
        }
    }

    pub fn tab_id(&self, index: usize) -> TabId {
        self.tabs[index].id
    }
}

impl TabCollection for InMemoryCollection {
    fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn groups(&self) -> &[TabGroup] {
        &self.groups
    }

    fn current_tab_id(&self) -> Option<TabId> {
        self.current
    }

    fn set_current_tab(&mut self, id: TabId) {
        self.current = Some(id);
    }

    fn close_tab_at(&mut self, index: usize, allow_closing_pinned: bool) {
        self.close_requests.push((index, allow_closing_pinned));
        if index < self.tabs.len() {
            let removed = self.tabs.remove(index);
            if self.current == Some(removed.id) {
                self.current = self.tabs.first().map(|t| t.id);
            }
        }
    }

    fn pin_tab(&mut self, id: TabId) {
        self.pin_requests.push(id);
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.pinned = true;
        }
    }

    fn unpin_tab(&mut self, id: TabId) {
        self.unpin_requests.push(id);
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
            tab.pinned = false;
        }
    }

    fn toggle_group_collapse(&mut self, id: GroupId) {
        if let Some(group) = self.groups.iter_mut().find(|g| g.id == id) {
            group.collapsed = !group.collapsed;
        }
    }

    fn move_list_item(
        &mut self,
        from: usize,
        to: usize,
        _change_group: Option<GroupId>,
        _disable_animations: bool,
    ) {
        self.move_requests.push((from, to));
        if from < self.tabs.len() {
            let tab = self.tabs.remove(from);
            let insert_at = to.min(self.tabs.len());
            self.tabs.insert(insert_at, tab);
        }
    }
}

/// Focus collaborator that counts omnibox focus requests.
#[derive(Default)]
pub struct RecordingFocus {
    pub requests: usize,
}

impl FocusRequester for RecordingFocus {
    fn request_omnibox_focus(&mut self) {
        self.requests += 1;
    }
}

/// Downgrade a concrete collection to the handle the controller takes.
pub fn collection_handle(rc: &Rc<RefCell<InMemoryCollection>>) -> CollectionHandle {
    let as_dyn: Rc<RefCell<dyn TabCollection>> = rc.clone();
    Rc::downgrade(&as_dyn)
}

/// Downgrade a concrete focus recorder to the handle the controller takes.
pub fn focus_handle(rc: &Rc<RefCell<RecordingFocus>>) -> FocusHandle {
    let as_dyn: Rc<RefCell<dyn FocusRequester>> = rc.clone();
    Rc::downgrade(&as_dyn)
}

/// A controller attached to the given collection plus a fresh focus recorder.
///
/// The returned `Rc`s must be kept alive for the controller's handles to
/// upgrade.
pub fn attached_controller(
    collection: InMemoryCollection,
) -> (
    TabBarController,
    Rc<RefCell<InMemoryCollection>>,
    Rc<RefCell<RecordingFocus>>,
) {
    let collection = Rc::new(RefCell::new(collection));
    let focus = Rc::new(RefCell::new(RecordingFocus::default()));
    let mut controller = TabBarController::new();
    controller.attach(collection_handle(&collection), focus_handle(&focus));
    (controller, collection, focus)
}

/// Standalone `GroupResolver` over a fixed group set, for organizer tests
/// that should not involve a controller or collection.
pub struct StubResolver {
    pub groups: Vec<TabGroup>,
}

impl GroupResolver for StubResolver {
    fn group_for_tab(&self, tab: &Tab) -> Option<TabGroup> {
        self.groups.iter().find(|g| g.contains_tab(tab)).cloned()
    }

    fn group_color(&self, group: &TabGroup) -> [u8; 3] {
        group.color.unwrap_or_else(|| fallback_group_color(group.id))
    }
}

/// Build a group over the current pages of the given tabs.
pub fn group_over(title: &str, tabs: &[&Tab]) -> TabGroup {
    let pages: Vec<PageId> = tabs.iter().map(|t| t.current_page).collect();
    TabGroup::new(Some(title.to_string()), pages)
}
