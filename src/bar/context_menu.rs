//! Right-click context menu for a tab (close, pin/unpin, group collapse).

use crate::controller::TabBarController;
use crate::model::{Tab, TabId};
use crate::organizer::GroupResolver;
use crate::ui_constants::{CONTEXT_MENU_ITEM_HEIGHT, CONTEXT_MENU_MIN_WIDTH};

use super::TabBarView;

impl TabBarView {
    /// Render the context menu for tab options.
    pub(super) fn render_context_menu(
        &mut self,
        ctx: &egui::Context,
        controller: &mut TabBarController,
        tab_id: TabId,
        tabs: &[Tab],
    ) {
        // The tab may have been closed elsewhere while the menu was open.
        let Some(tab) = tabs.iter().find(|t| t.id == tab_id) else {
            self.context_menu_tab = None;
            return;
        };
        let group = controller.group_for_tab(tab);
        let pinned = tab.pinned;

        let mut close_menu = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        let mut acted = false;

        let area_response = egui::Area::new(egui::Id::new("tab_strip_context_menu"))
            .fixed_pos(self.context_menu_pos)
            .constrain(true)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .inner_margin(egui::Margin::symmetric(1, 4))
                    .show(ui, |ui| {
                        ui.set_min_width(CONTEXT_MENU_MIN_WIDTH);
                        ui.style_mut().spacing.item_spacing = egui::vec2(0.0, 0.0);

                        let menu_item = |ui: &mut egui::Ui, label: &str| -> bool {
                            ui.add_sized(
                                [ui.available_width(), CONTEXT_MENU_ITEM_HEIGHT],
                                egui::Button::new(label)
                                    .frame(false)
                                    .fill(egui::Color32::TRANSPARENT),
                            )
                            .clicked()
                        };

                        if menu_item(ui, "Close Tab") {
                            controller.close_tab(tab_id);
                            acted = true;
                        }

                        let pin_label = if pinned { "Unpin Tab" } else { "Pin Tab" };
                        if menu_item(ui, pin_label) {
                            if pinned {
                                controller.unpin_tab(tab_id);
                            } else {
                                controller.pin_tab(tab_id);
                            }
                            acted = true;
                        }

                        if let Some(group) = &group {
                            ui.add_space(4.0);
                            ui.separator();
                            ui.add_space(4.0);

                            let toggle_label = if group.collapsed {
                                "Expand Group"
                            } else {
                                "Collapse Group"
                            };
                            if menu_item(ui, toggle_label) {
                                controller.toggle_group(group.id);
                                acted = true;
                            }
                        }
                    });
            });

        if acted {
            close_menu = true;
        }

        // Close on click outside, but not on the frame the menu was opened.
        let current_frame = ctx.cumulative_frame_nr();
        if !close_menu
            && current_frame > self.context_menu_opened_frame
            && ctx.input(|i| i.pointer.any_click())
            && !area_response.response.hovered()
        {
            close_menu = true;
        }

        if close_menu {
            self.context_menu_tab = None;
        }
    }
}
