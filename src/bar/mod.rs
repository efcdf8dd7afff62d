//! Tab strip view using egui
//!
//! Thin painting/interaction wrapper over the organization and interaction
//! core. All mutation flows through [`TabBarController`]; this layer only
//! lays items out, paints them, and forwards gestures.
//!
//! ## Module layout
//!
//! - this module: `TabBarView` state, the render entry point, scroll-to-active
//!   and window drag-exclusion bookkeeping.
//! - `tab_rendering`: drawing and gesture-wiring for a single tab.
//! - `group_rendering`: group header pill and flanking dividers.
//! - `context_menu`: right-click menu (close, pin/unpin, collapse/expand).

mod context_menu;
mod group_rendering;
mod tab_rendering;

pub use tab_rendering::tab_width_for_title;

use crate::config::{TabBarConfig, TabBarMode};
use crate::controller::TabBarController;
use crate::model::{ChromeHandle, TabId};
use crate::organizer::{RenderItem, organize};
use crate::ui_constants::{BAR_LEFT_PADDING, BAR_VERTICAL_PADDING};

/// Tab strip view state
///
/// Everything here is view-local and per-frame or per-geometry bookkeeping;
/// interaction state proper (hover, drag) lives in the controller.
pub struct TabBarView {
    /// Tab whose close button is hovered
    pub close_hovered: Option<TabId>,
    /// Tab for which the context menu is open
    context_menu_tab: Option<TabId>,
    /// Position where the context menu was opened
    context_menu_pos: egui::Pos2,
    /// Frame when the context menu was opened (to avoid closing on the same frame)
    context_menu_opened_frame: u64,
    /// Current tab as of the previous frame, for scroll-to-active detection
    last_current_tab: Option<TabId>,
    /// Tab to scroll into view this frame, consumed while drawing
    scroll_to: Option<TabId>,
    /// Bar rectangle last reported to the window chrome
    last_bar_rect: Option<egui::Rect>,
    /// Window drag-exclusion capability, if the host registered one
    chrome: Option<ChromeHandle>,
}

impl TabBarView {
    /// Create a new tab strip view
    pub fn new() -> Self {
        Self {
            close_hovered: None,
            context_menu_tab: None,
            context_menu_pos: egui::Pos2::ZERO,
            context_menu_opened_frame: 0,
            last_current_tab: None,
            scroll_to: None,
            last_bar_rect: None,
            chrome: None,
        }
    }

    /// Register the window chrome capability for drag-exclusion updates.
    pub fn set_window_chrome(&mut self, chrome: ChromeHandle) {
        self.chrome = Some(chrome);
    }

    /// Check if the tab bar should be visible
    pub fn should_show(&self, tab_count: usize, mode: TabBarMode) -> bool {
        match mode {
            TabBarMode::Always => true,
            TabBarMode::WhenMultiple => tab_count > 1,
            TabBarMode::Never => false,
        }
    }

    /// Height the bar occupies (0 when hidden)
    pub fn bar_height(&self, tab_count: usize, config: &TabBarConfig) -> f32 {
        if self.should_show(tab_count, config.tab_bar_mode) {
            config.tab_height + BAR_VERTICAL_PADDING
        } else {
            0.0
        }
    }

    /// Check if the context menu is currently open
    pub fn is_context_menu_open(&self) -> bool {
        self.context_menu_tab.is_some()
    }

    /// Render the tab strip panel and forward gestures to the controller.
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        controller: &mut TabBarController,
        config: &TabBarConfig,
    ) {
        let tabs = controller.tabs();

        if !self.should_show(tabs.len(), config.tab_bar_mode) {
            self.update_drag_exclusion(None);
            return;
        }

        // Current-tab change triggers one fire-and-forget scroll; re-triggering
        // for the same tab is harmless.
        let current = controller.current_tab_id();
        if current != self.last_current_tab {
            self.scroll_to = current;
            self.last_current_tab = current;
        }

        let items = organize(&tabs, controller);

        if controller.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        }

        let bg = config.bar_background;
        let frame = egui::Frame::NONE.fill(egui::Color32::from_rgb(bg[0], bg[1], bg[2]));

        let panel_response = egui::TopBottomPanel::top("tab_strip")
            .exact_height(config.tab_height + BAR_VERTICAL_PADDING)
            .frame(frame)
            .show(ctx, |ui| {
                egui::ScrollArea::horizontal()
                    .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing = egui::vec2(config.tab_spacing, 0.0);
                            ui.add_space(BAR_LEFT_PADDING);

                            for item in &items {
                                match item {
                                    RenderItem::StandaloneTab(tab) => {
                                        self.draw_tab(ui, controller, tab, None, config);
                                    }
                                    RenderItem::GroupedTab { tab, color, .. } => {
                                        self.draw_tab(ui, controller, tab, Some(*color), config);
                                    }
                                    RenderItem::GroupHeader {
                                        group,
                                        color,
                                        member_count,
                                        collapsed,
                                    } => {
                                        self.draw_group_header(
                                            ui,
                                            controller,
                                            group,
                                            *color,
                                            *member_count,
                                            *collapsed,
                                            config,
                                        );
                                    }
                                    RenderItem::GroupDivider { color } => {
                                        self.draw_group_divider(ui, *color, config);
                                    }
                                }
                            }
                        });
                    });
            });

        self.update_drag_exclusion(Some(panel_response.response.rect));

        if let Some(menu_tab) = self.context_menu_tab {
            self.render_context_menu(ctx, controller, menu_tab, &tabs);
        }
    }

    /// Report the bar rect to the window chrome, but only when it changed.
    fn update_drag_exclusion(&mut self, rect: Option<egui::Rect>) {
        if rect == self.last_bar_rect {
            return;
        }
        self.last_bar_rect = rect;
        if let Some(chrome) = self.chrome.as_ref().and_then(|c| c.upgrade()) {
            chrome.borrow_mut().set_tab_bar_exclusion(rect);
        }
    }
}

impl Default for TabBarView {
    fn default() -> Self {
        Self::new()
    }
}
