//! Read models for externally owned tabs and groups, plus the capability
//! traits through which the surrounding application is reached.
//!
//! This crate never creates or destroys tabs. It observes the collection and
//! requests mutation through [`TabCollection`]; whether a request is honoured
//! (and how concurrent mutations are serialized) is the application's
//! business. Capabilities are injected as `Weak` references so the strip can
//! outlive teardown ordering mistakes: a dead collaborator turns every
//! operation into a no-op.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Weak;

use uuid::Uuid;

/// Unique identifier of a tab.
pub type TabId = Uuid;
/// Unique identifier of a tab group.
pub type GroupId = Uuid;
/// Identifier of a browsing-history page node.
///
/// Group membership is keyed by page ids rather than tab ids, so a tab stays
/// in its group across navigations within the same history subtree.
pub type PageId = Uuid;

/// A single browsing context as the tab strip sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    /// Display title; may be empty for a freshly opened tab.
    pub title: String,
    /// Favicon glyph, if the page provided one. Rendered as text.
    pub favicon: Option<String>,
    pub pinned: bool,
    /// History node the tab currently sits on.
    pub current_page: PageId,
    /// History node the tab branched from, if it was opened from another page.
    pub origin_page: Option<PageId>,
}

impl Tab {
    /// Construct a fresh ungrouped tab with generated identifiers.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            favicon: None,
            pinned: false,
            current_page: Uuid::new_v4(),
            origin_page: None,
        }
    }

    /// Title to render; empty titles display as "New Tab".
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "New Tab"
        } else {
            &self.title
        }
    }
}

/// A named, coloured, collapsible cluster of tabs.
///
/// Membership is derived: a tab belongs to the group when its current page id
/// or its origin page id appears in `page_ids`. Groups hold no direct tab
/// references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    pub id: GroupId,
    pub title: Option<String>,
    /// Explicit colour; `None` falls back to the hash-indexed palette.
    pub color: Option<[u8; 3]>,
    pub page_ids: HashSet<PageId>,
    pub collapsed: bool,
}

impl TabGroup {
    /// Construct a group over the given page ids.
    pub fn new(title: Option<String>, page_ids: impl IntoIterator<Item = PageId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            color: None,
            page_ids: page_ids.into_iter().collect(),
            collapsed: false,
        }
    }

    /// Whether `tab` is a member of this group, via either its current page
    /// or the page it branched from.
    pub fn contains_tab(&self, tab: &Tab) -> bool {
        self.page_ids.contains(&tab.current_page)
            || tab
                .origin_page
                .is_some_and(|origin| self.page_ids.contains(&origin))
    }

    /// Title to render; untitled groups display as "Untitled Group".
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled Group")
    }
}

/// The authoritative tab collection owned by the surrounding application.
///
/// `tabs()` order is the canonical browser tab order. Mutating operations are
/// requests; the collection may refuse or reinterpret them and is responsible
/// for its own error reporting.
pub trait TabCollection {
    /// All tabs, in canonical order.
    fn tabs(&self) -> &[Tab];
    /// All groups any tab may belong to.
    fn groups(&self) -> &[TabGroup];
    /// Identifier of the current (active) tab, if any.
    fn current_tab_id(&self) -> Option<TabId>;
    /// Make the given tab current.
    fn set_current_tab(&mut self, id: TabId);
    /// Close the tab at `index` in canonical order.
    fn close_tab_at(&mut self, index: usize, allow_closing_pinned: bool);
    /// Pin the given tab.
    fn pin_tab(&mut self, id: TabId);
    /// Unpin the given tab.
    fn unpin_tab(&mut self, id: TabId);
    /// Toggle a group's collapsed state.
    fn toggle_group_collapse(&mut self, id: GroupId);
    /// Move the list item at `from` to `to`, optionally changing its group.
    fn move_list_item(
        &mut self,
        from: usize,
        to: usize,
        change_group: Option<GroupId>,
        disable_animations: bool,
    );
}

/// Capability to focus the address/search input, requested when an
/// already-current tab is re-selected.
pub trait FocusRequester {
    fn request_omnibox_focus(&mut self);
}

/// Capability to tell the host window which screen rectangle the tab bar
/// occupies, so clicks there are not interpreted as window-drag gestures.
pub trait WindowChrome {
    /// `None` clears the exclusion (bar hidden).
    fn set_tab_bar_exclusion(&mut self, rect: Option<egui::Rect>);
}

/// Non-owning handle to the shared tab collection.
pub type CollectionHandle = Weak<RefCell<dyn TabCollection>>;
/// Non-owning handle to the focus-request capability.
pub type FocusHandle = Weak<RefCell<dyn FocusRequester>>;
/// Non-owning handle to the window chrome capability.
pub type ChromeHandle = Weak<RefCell<dyn WindowChrome>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_displays_as_new_tab() {
        assert_eq!(Tab::new("").display_title(), "New Tab");
        assert_eq!(Tab::new("docs").display_title(), "docs");
    }

    #[test]
    fn untitled_group_displays_placeholder() {
        let group = TabGroup::new(None, []);
        assert_eq!(group.display_title(), "Untitled Group");
    }

    #[test]
    fn membership_matches_current_or_origin_page() {
        let member = Tab::new("member");
        let group = TabGroup::new(Some("g".into()), [member.current_page]);

        assert!(group.contains_tab(&member));

        let mut branched = Tab::new("branched");
        branched.origin_page = Some(member.current_page);
        assert!(group.contains_tab(&branched), "origin page also qualifies");

        let stranger = Tab::new("stranger");
        assert!(!group.contains_tab(&stranger));
    }
}
