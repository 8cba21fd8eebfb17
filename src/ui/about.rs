// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! About section.

/// Display the about blurb.
pub fn show(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("About").size(36.0).strong());
        ui.add_space(16.0);
        ui.set_max_width(640.0);
        ui.label(
            egui::RichText::new(
                "I build software with an eye for detail, from native tools \
                 to the web. This site collects the projects I keep coming \
                 back to.",
            )
            .size(16.0),
        );
    });
}
