//! Linearization of the flat tab order plus group membership into the
//! sequence of items the view renders.
//!
//! The organizer is a pure recomputation over its inputs: it never mutates
//! tabs or groups and holds no cache, so the output always reflects the
//! authoritative collection at the moment of the call.

use std::collections::HashSet;

use crate::model::{GroupId, Tab, TabGroup};

/// Read-only capability to resolve a tab's owning group and a group's
/// display colour. Implemented by the controller; stubbed in tests.
pub trait GroupResolver {
    /// The group `tab` belongs to, if any.
    fn group_for_tab(&self, tab: &Tab) -> Option<TabGroup>;
    /// The resolved display colour for `group` (explicit or palette).
    fn group_color(&self, group: &TabGroup) -> [u8; 3];
}

/// One renderable item of the tab strip.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderItem {
    /// A tab that belongs to no group.
    StandaloneTab(Tab),
    /// Emitted once per group, at the position of its first member tab.
    /// `member_count` counts all members even while the group is collapsed.
    GroupHeader {
        group: TabGroup,
        color: [u8; 3],
        member_count: usize,
        collapsed: bool,
    },
    /// Flanks a group's member run on both sides.
    GroupDivider { color: [u8; 3] },
    /// A member tab of an expanded group.
    GroupedTab {
        tab: Tab,
        group: GroupId,
        color: [u8; 3],
    },
}

/// Linearize `tabs` into render items.
///
/// Tabs are visited in canonical order. The first tab of each group triggers
/// emission of the whole group: header, opening divider, every member tab in
/// flat-list order (members need not be contiguous), closing divider.
/// Subsequent members of an already-emitted group are skipped. Collapsed
/// groups emit header and dividers but no member tabs.
pub fn organize(tabs: &[Tab], resolver: &dyn GroupResolver) -> Vec<RenderItem> {
    let mut items = Vec::with_capacity(tabs.len() + 4);
    let mut processed: HashSet<GroupId> = HashSet::new();

    for tab in tabs {
        let Some(group) = resolver.group_for_tab(tab) else {
            items.push(RenderItem::StandaloneTab(tab.clone()));
            continue;
        };

        if !processed.insert(group.id) {
            // Folded into the group emitted at its first member.
            continue;
        }

        let color = resolver.group_color(&group);

        // Whole-list membership pass: members of this group may be
        // interleaved with other tabs in the flat order.
        let members: Vec<&Tab> = tabs
            .iter()
            .filter(|t| {
                resolver
                    .group_for_tab(t)
                    .is_some_and(|owner| owner.id == group.id)
            })
            .collect();

        items.push(RenderItem::GroupHeader {
            color,
            member_count: members.len(),
            collapsed: group.collapsed,
            group: group.clone(),
        });
        items.push(RenderItem::GroupDivider { color });

        if !group.collapsed {
            for member in members {
                items.push(RenderItem::GroupedTab {
                    tab: member.clone(),
                    group: group.id,
                    color,
                });
            }
        }

        items.push(RenderItem::GroupDivider { color });
    }

    items
}
