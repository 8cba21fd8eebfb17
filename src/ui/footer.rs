// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page footer.

use chrono::{Datelike, Local};

/// Display the footer with the current year.
pub fn show(ui: &mut egui::Ui) {
    ui.separator();
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "© {} Portfolio. All rights reserved.",
                Local::now().year()
            ))
            .small()
            .weak(),
        );
    });
    ui.add_space(24.0);
}
