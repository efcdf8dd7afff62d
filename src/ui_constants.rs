//! Named constants for tab strip layout dimensions.
//!
//! Only UI layout constants (dimensions, sizes, spacing) belong here.
//! Colour values live in [`crate::config`] and [`crate::visual_state`];
//! algorithm parameters live next to their algorithms.

/// Horizontal padding between the panel edge and the first tab.
pub const BAR_LEFT_PADDING: f32 = 8.0;
/// Extra vertical room the bar reserves around the tabs themselves.
pub const BAR_VERTICAL_PADDING: f32 = 8.0;

/// Horizontal padding inside a tab between its edge and its content.
pub const TAB_CONTENT_PAD_X: f32 = 12.0;
/// Edge length of the favicon glyph box.
pub const TAB_FAVICON_SIZE: f32 = 16.0;
/// Gap between favicon, title, and close button within a tab.
pub const TAB_INNER_SPACING: f32 = 6.0;
/// Extra width a tab gains per character of title, up to the configured max.
pub const TAB_WIDTH_PER_TITLE_CHAR: f32 = 2.0;
/// Estimated average glyph advance used when truncating titles to fit.
pub const TAB_TITLE_CHAR_ADVANCE: f32 = 7.0;
/// Visual scale applied to the tab currently being dragged.
pub const TAB_DRAGGED_SCALE: f32 = 1.05;

/// Width of a group header pill while its group is collapsed (title + badge visible).
pub const GROUP_HEADER_WIDTH_COLLAPSED: f32 = 120.0;
/// Width of a group header pill while its group is expanded (colour dot only).
pub const GROUP_HEADER_WIDTH_EXPANDED: f32 = 40.0;
/// Diameter of the colour dot inside a group header.
pub const GROUP_HEADER_DOT_SIZE: f32 = 8.0;
/// Width of the divider flanking a group's member tabs.
pub const GROUP_DIVIDER_WIDTH: f32 = 1.0;
/// Vertical inset of a group divider relative to the tab height.
pub const GROUP_DIVIDER_INSET: f32 = 4.0;
/// Height of the group-colour underline drawn along a grouped tab's bottom edge.
pub const GROUP_UNDERLINE_HEIGHT: f32 = 2.0;

/// Minimum width of the right-click context menu.
pub const CONTEXT_MENU_MIN_WIDTH: f32 = 150.0;
/// Height of a single context menu row.
pub const CONTEXT_MENU_ITEM_HEIGHT: f32 = 24.0;
