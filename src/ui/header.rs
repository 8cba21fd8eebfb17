// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top header bar.
//!
//! Brand mark on the left, inline section links on the right, and a
//! scroll progress line along the bottom edge. The app hides the whole
//! panel while the page is being scrolled down past the hero.

use crate::constants::{Section, HEADER_NAV};
use crate::util::scroll::ScrollTracker;

/// Display the header content. Returns the section of a clicked link.
pub fn show(ui: &mut egui::Ui, scroll: &ScrollTracker) -> Option<Section> {
    let mut target = None;

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add_space(16.0);
        ui.label(egui::RichText::new("Portfolio").strong().size(20.0));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(16.0);
            for section in HEADER_NAV.iter().rev() {
                if ui.link(section.label()).clicked() {
                    log::info!("Header nav to {}", section.anchor());
                    target = Some(*section);
                }
                ui.add_space(8.0);
            }
        });
    });
    ui.add_space(8.0);

    // Scroll progress along the bottom edge.
    let rect = ui.max_rect();
    let width = rect.width() * scroll.progress.clamp(0.0, 1.0);
    if width > 0.0 {
        ui.painter().line_segment(
            [
                egui::pos2(rect.left(), rect.bottom()),
                egui::pos2(rect.left() + width, rect.bottom()),
            ],
            egui::Stroke::new(2.0, ui.visuals().selection.bg_fill),
        );
    }

    target
}
