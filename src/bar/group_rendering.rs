//! Group header pill and the dividers flanking a group's member tabs.

use crate::config::TabBarConfig;
use crate::controller::TabBarController;
use crate::model::TabGroup;
use crate::ui_constants::{
    GROUP_DIVIDER_INSET, GROUP_DIVIDER_WIDTH, GROUP_HEADER_DOT_SIZE,
    GROUP_HEADER_WIDTH_COLLAPSED, GROUP_HEADER_WIDTH_EXPANDED, TAB_INNER_SPACING,
};

use super::TabBarView;

impl TabBarView {
    /// Draw the group header pill. Clicking it toggles collapse.
    ///
    /// Collapsed groups show the wide pill with title and member-count badge
    /// (the header is the group's only visible representative); expanded
    /// groups shrink to the colour-dot pill.
    pub(super) fn draw_group_header(
        &mut self,
        ui: &mut egui::Ui,
        controller: &mut TabBarController,
        group: &TabGroup,
        color: [u8; 3],
        member_count: usize,
        collapsed: bool,
        config: &TabBarConfig,
    ) {
        let width = if collapsed {
            GROUP_HEADER_WIDTH_COLLAPSED
        } else {
            GROUP_HEADER_WIDTH_EXPANDED
        };
        let height = config.tab_height - 4.0;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let rounding = (config.tab_corner_radius - 2.0).max(0.0);
            let fill_alpha: u8 = if response.hovered() { 38 } else { 20 };
            ui.painter().rect_filled(
                rect,
                rounding,
                egui::Color32::from_rgba_unmultiplied(color[0], color[1], color[2], fill_alpha),
            );
            ui.painter().rect_stroke(
                rect,
                rounding,
                egui::Stroke::new(
                    0.5,
                    egui::Color32::from_rgba_unmultiplied(color[0], color[1], color[2], 80),
                ),
                egui::StrokeKind::Inside,
            );

            // Colour dot
            let dot_center = egui::pos2(
                rect.left() + TAB_INNER_SPACING + GROUP_HEADER_DOT_SIZE / 2.0,
                rect.center().y,
            );
            ui.painter().circle_filled(
                dot_center,
                GROUP_HEADER_DOT_SIZE / 2.0,
                egui::Color32::from_rgb(color[0], color[1], color[2]),
            );

            if collapsed {
                // Title
                ui.painter().text(
                    egui::pos2(
                        dot_center.x + GROUP_HEADER_DOT_SIZE / 2.0 + TAB_INNER_SPACING,
                        rect.center().y,
                    ),
                    egui::Align2::LEFT_CENTER,
                    group.display_title(),
                    egui::FontId::proportional(11.0),
                    egui::Color32::from_rgb(96, 100, 106),
                );

                // Member-count badge on the right; counts all members even
                // though none are rendered while collapsed.
                let badge_center = egui::pos2(rect.right() - 12.0, rect.center().y);
                ui.painter().circle_filled(
                    badge_center,
                    7.0,
                    egui::Color32::from_rgba_unmultiplied(color[0], color[1], color[2], 200),
                );
                ui.painter().text(
                    badge_center,
                    egui::Align2::CENTER_CENTER,
                    member_count.to_string(),
                    egui::FontId::proportional(9.0),
                    egui::Color32::WHITE,
                );
            }
        }

        if !collapsed && response.hovered() {
            response.clone().on_hover_text(format!(
                "{} — {} tabs",
                group.display_title(),
                member_count
            ));
        }

        if response.clicked_by(egui::PointerButton::Primary) {
            controller.toggle_group(group.id);
        }
    }

    /// Draw the thin vertical divider that flanks a group's member run.
    pub(super) fn draw_group_divider(
        &mut self,
        ui: &mut egui::Ui,
        color: [u8; 3],
        config: &TabBarConfig,
    ) {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(GROUP_DIVIDER_WIDTH, config.tab_height),
            egui::Sense::hover(),
        );
        let line = egui::Rect::from_center_size(
            rect.center(),
            egui::vec2(
                GROUP_DIVIDER_WIDTH,
                config.tab_height - 2.0 * GROUP_DIVIDER_INSET,
            ),
        );
        ui.painter().rect_filled(
            line,
            0.0,
            egui::Color32::from_rgba_unmultiplied(color[0], color[1], color[2], 150),
        );
    }
}
