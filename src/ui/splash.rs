// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Full-viewport loading screen.
//!
//! Shown from launch until the reveal sequence finishes. During the exit
//! window the whole overlay slides up and out of the viewport.

use crate::constants::SPLASH_BACKGROUND;
use crate::ui::logo;
use crate::util::motion;

/// Display the splash overlay.
///
/// `exit_t` is the slide-out progress: 0 while holding, rising to 1 over
/// the exit window.
pub fn show(ctx: &egui::Context, exit_t: f32) {
    let screen = ctx.screen_rect();
    let eased = motion::ease_in_out(exit_t);
    let rect = screen.translate(egui::vec2(0.0, -eased * screen.height()));

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("splash_overlay"),
    ));

    painter.rect_filled(rect, 0.0, SPLASH_BACKGROUND);

    let center = rect.center();
    logo::paint_monogram(&painter, egui::pos2(center.x, center.y - 24.0), 40.0);
    painter.text(
        egui::pos2(center.x, center.y + 48.0),
        egui::Align2::CENTER_CENTER,
        "Portfolio",
        egui::FontId::proportional(24.0),
        egui::Color32::from_rgb(232, 227, 220),
    );
}
