// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project showcase grid.
//!
//! Renders one card per project in input order: title, description, tag
//! chips, and a links row shown only when the project carries links.
//! Column count follows the available width's breakpoint.

use crate::constants::breakpoint;
use crate::models::project::Project;

/// Gap between card rows.
const ROW_GAP: f32 = 24.0;

/// Number of grid columns for the available width.
pub fn grid_columns(width: f32) -> usize {
    if width >= breakpoint::LG {
        3
    } else if width >= breakpoint::MD {
        2
    } else {
        1
    }
}

/// Display the projects section.
pub fn show(ui: &mut egui::Ui, projects: &[Project]) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Projects").size(36.0).strong());
    });
    ui.add_space(32.0);

    let columns = grid_columns(ui.available_width());
    for row in projects.chunks(columns) {
        ui.columns(columns, |columns| {
            for (i, project) in row.iter().enumerate() {
                card(&mut columns[i], project);
            }
        });
        ui.add_space(ROW_GAP);
    }
}

/// Display a single project card.
fn card(ui: &mut egui::Ui, project: &Project) {
    egui::Frame::group(ui.style())
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&project.title).size(18.0).strong());
                if project.featured {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        chip(ui, "★ Featured");
                    });
                }
            });
            ui.add_space(6.0);
            ui.label(egui::RichText::new(&project.description).weak());
            ui.add_space(10.0);

            ui.horizontal_wrapped(|ui| {
                for tech in &project.technologies {
                    chip(ui, tech);
                }
            });

            let links = project.visible_links();
            if !links.is_empty() {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    for (kind, url) in links {
                        if ui.link(kind.label()).clicked() {
                            log::info!("Opening {} link: {}", kind.label(), url);
                            // New browsing context; the web backend adds
                            // the safe-opener attributes.
                            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                        }
                        ui.add_space(8.0);
                    }
                });
            }
        });
}

/// Small rounded tag chip.
fn chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(egui::Rounding::same(4.0))
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small());
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_column_below_md() {
        assert_eq!(grid_columns(320.0), 1);
        assert_eq!(grid_columns(breakpoint::MD - 1.0), 1);
    }

    #[test]
    fn test_two_columns_from_md() {
        assert_eq!(grid_columns(breakpoint::MD), 2);
        assert_eq!(grid_columns(breakpoint::LG - 1.0), 2);
    }

    #[test]
    fn test_three_columns_from_lg() {
        assert_eq!(grid_columns(breakpoint::LG), 3);
        assert_eq!(grid_columns(1920.0), 3);
    }
}
