// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio logo, embedded as a static image.
//!
//! The PNG is decoded once at startup into an egui texture. If decoding
//! fails the logo degrades to a painted monogram instead of erroring.

use anyhow::Result;

use crate::constants::{anim, SPLASH_BACKGROUND};

static LOGO_PNG: &[u8] = include_bytes!("../../assets/sidebar_logo.png");

/// Logo edge length in the sidebar rail.
const LOGO_SIZE: f32 = 64.0;

/// Decode the embedded logo into a texture.
///
/// Called once at app construction so the image is ready before the
/// sidebar first renders.
pub fn load_texture(ctx: &egui::Context) -> Result<egui::TextureHandle> {
    let decoded = image::load_from_memory(LOGO_PNG)?.to_rgba8();
    let size = [decoded.width() as usize, decoded.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, decoded.as_raw());
    Ok(ctx.load_texture("sidebar_logo", color_image, egui::TextureOptions::LINEAR))
}

/// Display the sidebar logo, scaling up slightly on hover.
pub fn show(ui: &mut egui::Ui, texture: Option<&egui::TextureHandle>) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(LOGO_SIZE + 8.0, LOGO_SIZE + 8.0), egui::Sense::hover());

    let t = ui.ctx().animate_bool_with_time(
        egui::Id::new("sidebar_logo_hover"),
        response.hovered(),
        anim::FAST,
    );
    let size = LOGO_SIZE * (1.0 + 0.10 * t);
    let draw_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(size, size));

    match texture {
        Some(texture) => {
            ui.painter().image(
                texture.id(),
                draw_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }
        None => paint_monogram(ui.painter(), rect.center(), size / 2.0),
    }

    response.on_hover_text("Portfolio Logo");
}

/// Painted fallback mark, also used by the splash screen.
pub fn paint_monogram(painter: &egui::Painter, center: egui::Pos2, radius: f32) {
    let accent = egui::Color32::from_rgb(232, 227, 220);
    painter.rect_filled(
        egui::Rect::from_center_size(center, egui::vec2(radius * 2.0, radius * 2.0)),
        radius * 0.35,
        SPLASH_BACKGROUND,
    );
    painter.circle_stroke(center, radius * 0.62, egui::Stroke::new(radius * 0.16, accent));
    // Open the ring on the right, echoing the image asset.
    painter.rect_filled(
        egui::Rect::from_min_size(
            egui::pos2(center.x + radius * 0.3, center.y - radius * 0.14),
            egui::vec2(radius * 0.5, radius * 0.28),
        ),
        0.0,
        SPLASH_BACKGROUND,
    );
}
