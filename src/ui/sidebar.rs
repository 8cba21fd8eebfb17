// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sidebar navigation.
//!
//! A fixed rail holds the hamburger toggle, the logo, and a copyright
//! mark. Opening the menu dims the page behind a backdrop and slides in
//! a panel of section links. The toggle is reachable from the hamburger,
//! the backdrop, and every nav link.

use crate::constants::{anim, Section, NAV_PANEL_WIDTH, SIDEBAR_RAIL_WIDTH};
use crate::ui::{hamburger, logo};
use crate::util::motion::{self, SlideFrom};

/// Sidebar open/closed state. Initial state is closed; toggling is
/// reversible for the lifetime of the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Interaction reported back to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    None,
    Toggle,
    Navigate(Section),
}

/// Display the fixed rail: hamburger on top, logo centered, copyright
/// at the bottom.
pub fn rail(
    ui: &mut egui::Ui,
    open: bool,
    logo_texture: Option<&egui::TextureHandle>,
) -> SidebarAction {
    let mut action = SidebarAction::None;

    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        if hamburger::show(ui, open).clicked() {
            action = SidebarAction::Toggle;
        }

        // Center the logo in the run between hamburger and copyright.
        let logo_block = 72.0;
        let bottom_reserve = 56.0;
        let gap = (ui.available_height() - logo_block - bottom_reserve).max(0.0);
        ui.add_space(gap / 2.0);
        logo::show(ui, logo_texture);

        ui.add_space((ui.available_height() - 40.0).max(0.0));
        ui.label(egui::RichText::new("© 2025").small().weak());
    });

    action
}

/// Display the backdrop and the slide-in navigation panel.
///
/// Rendered above the page whenever the menu is open or still animating
/// shut. Clicking the backdrop or any link closes the menu.
pub fn nav_overlay(ctx: &egui::Context, open: bool) -> SidebarAction {
    let mut action = SidebarAction::None;

    let t = ctx.animate_bool_with_time(egui::Id::new("nav_panel_slide"), open, anim::NORMAL);
    if t <= 0.0 {
        return action;
    }

    let screen = ctx.screen_rect();

    // Backdrop over the page; the rail stays uncovered so the hamburger
    // remains visible while open.
    let backdrop = egui::Rect::from_min_max(egui::pos2(SIDEBAR_RAIL_WIDTH, 0.0), screen.max);
    egui::Area::new(egui::Id::new("nav_backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(backdrop.min)
        .show(ctx, |ui| {
            let response = ui.allocate_response(backdrop.size(), egui::Sense::click());
            ui.painter().rect_filled(
                backdrop,
                0.0,
                egui::Color32::from_black_alpha((128.0 * t) as u8),
            );
            if open && response.clicked() {
                action = SidebarAction::Toggle;
            }
        });

    // The panel slides out from behind the rail.
    let x = SIDEBAR_RAIL_WIDTH + (t - 1.0) * NAV_PANEL_WIDTH;
    egui::Area::new(egui::Id::new("nav_panel"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::pos2(x, 0.0))
        .show(ctx, |ui| {
            let fill = ui.visuals().panel_fill;
            egui::Frame::none()
                .fill(fill)
                .inner_margin(egui::Margin::symmetric(24.0, 48.0))
                .show(ui, |ui| {
                    ui.set_width(NAV_PANEL_WIDTH - 48.0);
                    ui.set_min_height(screen.height() - 96.0);

                    let text_color = ui.visuals().strong_text_color();
                    for (i, section) in Section::ALL.iter().enumerate() {
                        // Staggered entry while the panel slides in.
                        let item_t =
                            (t * Section::ALL.len() as f32 - i as f32).clamp(0.0, 1.0);
                        let offset = motion::enter_offset(SlideFrom::Left, item_t, 20.0);

                        let (row, _) = ui.allocate_exact_size(
                            egui::vec2(ui.available_width(), 28.0),
                            egui::Sense::hover(),
                        );
                        let link = egui::Link::new(
                            egui::RichText::new(section.label())
                                .size(18.0)
                                .color(text_color.gamma_multiply(item_t)),
                        );
                        if ui.put(row.translate(egui::vec2(offset.x, 0.0)), link).clicked() {
                            log::info!("Sidebar nav to {}", section.anchor());
                            action = SidebarAction::Navigate(*section);
                        }
                        ui.add_space(12.0);
                    }
                });

            // Right border of the panel.
            let edge = ui.min_rect();
            ui.painter().line_segment(
                [edge.right_top(), edge.right_bottom()],
                egui::Stroke::new(1.0, ui.visuals().weak_text_color().gamma_multiply(0.3)),
            );
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        assert!(!SidebarState::default().open);
    }

    #[test]
    fn test_toggle_flips_state() {
        let mut state = SidebarState::default();
        state.toggle();
        assert!(state.open);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut state = SidebarState::default();
        state.toggle();
        state.toggle();
        assert_eq!(state, SidebarState::default());

        // Parity holds from the open state too.
        let mut open = SidebarState { open: true };
        open.toggle();
        open.toggle();
        assert!(open.open);
    }
}
