//! Drawing and gesture wiring for a single tab.

use crate::config::TabBarConfig;
use crate::controller::TabBarController;
use crate::drag::reorder_target;
use crate::model::Tab;
use crate::ui_constants::{
    GROUP_UNDERLINE_HEIGHT, TAB_CONTENT_PAD_X, TAB_DRAGGED_SCALE, TAB_FAVICON_SIZE,
    TAB_INNER_SPACING, TAB_TITLE_CHAR_ADVANCE, TAB_WIDTH_PER_TITLE_CHAR,
};
use crate::visual_state::TabVisualState;

use super::TabBarView;

/// Content-dependent tab width: the minimum width plus a small per-character
/// widening, clamped to the configured maximum.
pub fn tab_width_for_title(title: &str, config: &TabBarConfig) -> f32 {
    let widened = config.tab_min_width + title.chars().count() as f32 * TAB_WIDTH_PER_TITLE_CHAR;
    widened.clamp(config.tab_min_width, config.tab_max_width)
}

/// Truncate `title` to at most `max_chars` characters, appending an ellipsis
/// when anything was cut.
fn truncate_title(title: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return "…".to_string();
    }
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let mut out: String = title.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

impl TabBarView {
    /// Draw one tab and wire its click/hover/drag gestures to the controller.
    pub(super) fn draw_tab(
        &mut self,
        ui: &mut egui::Ui,
        controller: &mut TabBarController,
        tab: &Tab,
        group_color: Option<[u8; 3]>,
        config: &TabBarConfig,
    ) {
        let width = tab_width_for_title(tab.display_title(), config);
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(width, config.tab_height),
            egui::Sense::click_and_drag(),
        );

        // Hover is single-assignment: entering a tab replaces any previous
        // hovered id, leaving clears it only if it is still ours.
        if response.hovered() {
            controller.set_hovered(Some(tab.id));
        } else if controller.is_hovered(tab.id) {
            controller.set_hovered(None);
        }

        let is_active = controller.is_active(tab.id);
        let is_dragged = controller.is_dragging() && controller.dragged_tab() == Some(tab.id);
        let state = TabVisualState::resolve(is_active, controller.is_hovered(tab.id));
        let show_close = controller.should_show_close_button(tab.id);

        if self.scroll_to == Some(tab.id) {
            ui.scroll_to_rect(rect, Some(egui::Align::Center));
            self.scroll_to = None;
        }

        if ui.is_rect_visible(rect) {
            // Dragged tab scales up slightly; colour state is unaffected.
            let draw_rect = if is_dragged {
                egui::Rect::from_center_size(rect.center(), rect.size() * TAB_DRAGGED_SCALE)
            } else {
                rect
            };

            let bg = state.background(config);
            ui.painter().rect_filled(
                draw_rect,
                config.tab_corner_radius,
                egui::Color32::from_rgb(bg[0], bg[1], bg[2]),
            );
            let border = state.border(config);
            ui.painter().rect_stroke(
                draw_rect,
                config.tab_corner_radius,
                egui::Stroke::new(0.5, egui::Color32::from_rgb(border[0], border[1], border[2])),
                egui::StrokeKind::Inside,
            );

            // Group membership underline along the bottom edge.
            if let Some(c) = group_color {
                let underline = egui::Rect::from_min_max(
                    egui::pos2(
                        draw_rect.left() + TAB_CONTENT_PAD_X,
                        draw_rect.bottom() - GROUP_UNDERLINE_HEIGHT,
                    ),
                    egui::pos2(draw_rect.right() - TAB_CONTENT_PAD_X, draw_rect.bottom()),
                );
                ui.painter()
                    .rect_filled(underline, 0.0, egui::Color32::from_rgb(c[0], c[1], c[2]));
            }

            let text = state.text(config);
            let text_color = egui::Color32::from_rgb(text[0], text[1], text[2]);

            // Favicon glyph, falling back to a globe.
            let favicon = tab.favicon.as_deref().unwrap_or("\u{1F310}");
            ui.painter().text(
                egui::pos2(draw_rect.left() + TAB_CONTENT_PAD_X, draw_rect.center().y),
                egui::Align2::LEFT_CENTER,
                favicon,
                egui::FontId::proportional(12.0),
                text_color,
            );

            // Title, truncated to the room between favicon and close button.
            let close_reserved = if show_close {
                config.close_button_size + TAB_INNER_SPACING
            } else {
                0.0
            };
            let title_left =
                draw_rect.left() + TAB_CONTENT_PAD_X + TAB_FAVICON_SIZE + TAB_INNER_SPACING;
            let available = draw_rect.right() - TAB_CONTENT_PAD_X - close_reserved - title_left;
            let max_chars = (available / TAB_TITLE_CHAR_ADVANCE).max(0.0) as usize;
            ui.painter().text(
                egui::pos2(title_left, draw_rect.center().y),
                egui::Align2::LEFT_CENTER,
                truncate_title(tab.display_title(), max_chars),
                egui::FontId::proportional(12.0),
                text_color,
            );

            if show_close {
                self.draw_close_button(ui, tab, draw_rect, config);
            }
        }

        // Click: close button wins over tab selection.
        if response.clicked_by(egui::PointerButton::Primary) {
            if self.close_hovered == Some(tab.id) {
                controller.close_tab(tab.id);
            } else {
                controller.select_tab(tab.id);
            }
        }

        if response.secondary_clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.context_menu_tab = Some(tab.id);
                self.context_menu_pos = pos;
                self.context_menu_opened_frame = ui.ctx().cumulative_frame_nr();
            }
        }

        if response.drag_started_by(egui::PointerButton::Primary) {
            controller.start_drag(tab.id);
        }
        if controller.is_dragging() && controller.dragged_tab() == Some(tab.id) {
            let (origin, pos) =
                ui.ctx().input(|i| (i.pointer.press_origin(), i.pointer.hover_pos()));
            if let (Some(origin), Some(pos)) = (origin, pos) {
                controller.update_drag(pos - origin);
            }
        }
        if response.drag_stopped() && controller.dragged_tab() == Some(tab.id) {
            let delta = controller.drag_offset().x;
            // Re-resolve the index against the live list; it may have changed
            // since the drag started.
            let live = controller.tabs();
            if let Some(from) = live.iter().position(|t| t.id == tab.id) {
                if let Some(to) = reorder_target(delta, from, live.len(), config) {
                    controller.move_tab(from, to);
                }
            }
            controller.end_drag();
        }
    }

    /// Close button with its own hover state, hit-tested by pointer
    /// containment rather than a nested widget.
    fn draw_close_button(
        &mut self,
        ui: &mut egui::Ui,
        tab: &Tab,
        tab_rect: egui::Rect,
        config: &TabBarConfig,
    ) {
        let close_rect = egui::Rect::from_center_size(
            egui::pos2(
                tab_rect.right() - TAB_CONTENT_PAD_X - config.close_button_size / 2.0,
                tab_rect.center().y,
            ),
            egui::Vec2::splat(config.close_button_size),
        );

        let pointer_pos = ui.ctx().input(|i| i.pointer.hover_pos());
        let close_hovered = pointer_pos.is_some_and(|pos| close_rect.contains(pos));
        if close_hovered {
            self.close_hovered = Some(tab.id);
        } else if self.close_hovered == Some(tab.id) {
            self.close_hovered = None;
        }

        let color = if self.close_hovered == Some(tab.id) {
            let c = config.close_button_hover_color;
            ui.painter().circle_filled(
                close_rect.center(),
                config.close_button_size / 2.0,
                egui::Color32::from_rgba_unmultiplied(c[0], c[1], c[2], 30),
            );
            egui::Color32::from_rgb(c[0], c[1], c[2])
        } else {
            let c = config.close_button_color;
            egui::Color32::from_rgb(c[0], c[1], c[2])
        };

        ui.painter().text(
            close_rect.center(),
            egui::Align2::CENTER_CENTER,
            "\u{00D7}",
            egui::FontId::proportional(10.0),
            color,
        );
    }
}
