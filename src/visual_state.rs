//! Pure mapping from a tab's interaction flags to its display state and
//! colours, plus the fallback palette for group colours.

use crate::config::TabBarConfig;
use crate::model::GroupId;

/// Display state of a tab. Dragging affects scale and z-order only, never the
/// colour state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabVisualState {
    Active,
    Inactive,
    Hover,
}

impl TabVisualState {
    /// Resolve the display state from interaction flags.
    ///
    /// Precedence: `Active` over `Hover` over `Inactive`.
    pub fn resolve(is_active: bool, is_hovered: bool) -> Self {
        if is_active {
            TabVisualState::Active
        } else if is_hovered {
            TabVisualState::Hover
        } else {
            TabVisualState::Inactive
        }
    }

    /// Background colour for this state.
    pub fn background(self, config: &TabBarConfig) -> [u8; 3] {
        match self {
            TabVisualState::Active => config.tab_active_background,
            TabVisualState::Inactive => config.tab_inactive_background,
            TabVisualState::Hover => config.tab_hover_background,
        }
    }

    /// Border colour for this state.
    pub fn border(self, config: &TabBarConfig) -> [u8; 3] {
        match self {
            TabVisualState::Active => config.tab_active_border,
            TabVisualState::Inactive => config.tab_inactive_border,
            TabVisualState::Hover => config.tab_hover_border,
        }
    }

    /// Title text colour for this state. Hovered tabs keep the inactive text
    /// colour; only the active tab gets the emphasised one.
    pub fn text(self, config: &TabBarConfig) -> [u8; 3] {
        match self {
            TabVisualState::Active => config.tab_active_text,
            TabVisualState::Inactive | TabVisualState::Hover => config.tab_inactive_text,
        }
    }
}

/// Fallback palette for groups without an explicit colour:
/// blue, green, orange, purple, pink, red, yellow, gray.
pub const GROUP_COLOR_PALETTE: [[u8; 3]; 8] = [
    [66, 133, 244],
    [52, 168, 83],
    [250, 123, 23],
    [161, 66, 244],
    [233, 75, 161],
    [217, 48, 37],
    [249, 171, 0],
    [128, 134, 139],
];

/// Deterministic palette colour for a group id.
///
/// Stable across calls for the same id; two groups may share a colour, which
/// is acceptable.
pub fn fallback_group_color(id: GroupId) -> [u8; 3] {
    let index = (id.as_u128() % GROUP_COLOR_PALETTE.len() as u128) as usize;
    GROUP_COLOR_PALETTE[index]
}
