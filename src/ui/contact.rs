// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact section.
//!
//! External profiles open in a new browsing context, same as project
//! links.

const PROFILES: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/yourusername"),
    ("LinkedIn", "https://www.linkedin.com/in/yourusername"),
    ("Email", "mailto:hello@example.com"),
];

/// Display the contact section.
pub fn show(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Contact").size(36.0).strong());
        ui.add_space(16.0);
        ui.label(egui::RichText::new("Want to work together? Get in touch.").weak());
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            // Center the row of links.
            let row_width = 220.0;
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            for (label, url) in PROFILES {
                if ui.link(label).clicked() {
                    log::info!("Opening profile link: {}", url);
                    ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                }
                ui.add_space(8.0);
            }
        });
    });
}
