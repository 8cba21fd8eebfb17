// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Animated hamburger menu icon.
//!
//! Three strokes whose endpoints interpolate between a fixed bar
//! geometry (closed) and a fixed cross geometry (open), keyed by the
//! sidebar state. The middle bar fades out while morphing open.

use crate::constants::anim;

/// One stroke of the icon at a given morph progress, in unit-square
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub opacity: f32,
}

/// Closed geometry: three horizontal bars.
const CLOSED: [((f32, f32), (f32, f32)); 3] = [
    ((0.20, 0.29), (0.80, 0.29)),
    ((0.20, 0.50), (0.80, 0.50)),
    ((0.20, 0.71), (0.80, 0.71)),
];

/// Open geometry: two diagonals forming a cross; the middle bar keeps
/// its place but is fully faded by then.
const OPEN: [((f32, f32), (f32, f32)); 3] = [
    ((0.25, 0.25), (0.75, 0.75)),
    ((0.20, 0.50), (0.80, 0.50)),
    ((0.25, 0.75), (0.75, 0.25)),
];

/// Stroke geometry at morph progress `t` (0 = closed, 1 = open).
pub fn bars_at(t: f32) -> [Bar; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut bars = [Bar {
        start: (0.0, 0.0),
        end: (0.0, 0.0),
        opacity: 1.0,
    }; 3];

    for (i, bar) in bars.iter_mut().enumerate() {
        bar.start = lerp_point(CLOSED[i].0, OPEN[i].0, t);
        bar.end = lerp_point(CLOSED[i].1, OPEN[i].1, t);
    }
    // Middle bar fades out as the cross forms.
    bars[1].opacity = 1.0 - t;
    bars
}

fn lerp_point(a: (f32, f32), b: (f32, f32), t: f32) -> (f32, f32) {
    (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
}

/// Display the icon and report clicks.
pub fn show(ui: &mut egui::Ui, is_open: bool) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::click());

    let t = ui.ctx().animate_bool_with_time(
        egui::Id::new("hamburger_morph"),
        is_open,
        anim::HAMBURGER_MORPH,
    );

    let painter = ui.painter();
    for bar in bars_at(t) {
        let color = egui::Color32::WHITE.gamma_multiply(bar.opacity);
        painter.line_segment(
            [at(rect, bar.start), at(rect, bar.end)],
            egui::Stroke::new(2.0, color),
        );
    }

    response.on_hover_text("Toggle navigation menu")
}

fn at(rect: egui::Rect, point: (f32, f32)) -> egui::Pos2 {
    egui::pos2(
        rect.min.x + point.0 * rect.width(),
        rect.min.y + point.1 * rect.height(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_geometry_at_zero() {
        let bars = bars_at(0.0);
        assert_eq!(bars[0].start, (0.20, 0.29));
        assert_eq!(bars[0].end, (0.80, 0.29));
        assert_eq!(bars[1].start, (0.20, 0.50));
        assert_eq!(bars[2].end, (0.80, 0.71));
        assert!(bars.iter().all(|b| b.opacity == 1.0));
    }

    #[test]
    fn test_open_geometry_at_one() {
        let bars = bars_at(1.0);
        assert_eq!(bars[0].start, (0.25, 0.25));
        assert_eq!(bars[0].end, (0.75, 0.75));
        assert_eq!(bars[2].start, (0.25, 0.75));
        assert_eq!(bars[2].end, (0.75, 0.25));
        assert_eq!(bars[1].opacity, 0.0);
    }

    #[test]
    fn test_midpoint_interpolates_linearly() {
        let bars = bars_at(0.5);
        assert!((bars[0].start.0 - 0.225).abs() < 1e-6);
        assert!((bars[0].start.1 - 0.27).abs() < 1e-6);
        assert_eq!(bars[1].opacity, 0.5);
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(bars_at(-1.0), bars_at(0.0));
        assert_eq!(bars_at(2.0), bars_at(1.0));
    }
}
