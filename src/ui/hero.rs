// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hero banner.
//!
//! Viewport-height centered title with an optional subtitle. Both fade
//! and rise into place when the page reveals, the subtitle slightly
//! behind the title.

use crate::constants::{anim, breakpoint};
use crate::util::motion::{self, SlideFrom};

/// Delay before the subtitle starts entering, in seconds.
const SUBTITLE_DELAY: f32 = 0.2;

/// Seconds after reveal until every enter animation has finished.
pub const ENTER_WINDOW: f32 = SUBTITLE_DELAY + anim::NORMAL;

/// Enter progress at `secs` since reveal for content whose entry starts
/// after `delay`.
pub fn enter_progress(secs: f32, delay: f32) -> f32 {
    ((secs - delay) / anim::NORMAL).clamp(0.0, 1.0)
}

/// Display the hero section.
///
/// `reveal_secs` is the time since the page content was revealed; it
/// drives the staggered title and subtitle entry.
pub fn show(
    ui: &mut egui::Ui,
    title: &str,
    subtitle: Option<&str>,
    min_height: f32,
    reveal_secs: f32,
) {
    let title_t = motion::ease_in_out(enter_progress(reveal_secs, 0.0));
    let subtitle_t = motion::ease_in_out(enter_progress(reveal_secs, SUBTITLE_DELAY));

    // Title steps up at the md breakpoint.
    let title_size = if ui.available_width() >= breakpoint::MD {
        72.0
    } else {
        48.0
    };

    ui.vertical_centered(|ui| {
        ui.set_min_height(min_height);

        let content_height = title_size + 72.0;
        ui.add_space(((min_height - content_height) / 2.0).max(0.0));

        ui.add_space(motion::enter_offset(SlideFrom::Up, title_t, 20.0).y);
        ui.label(
            egui::RichText::new(title)
                .size(title_size)
                .strong()
                .color(ui.visuals().strong_text_color().gamma_multiply(title_t)),
        );

        if let Some(subtitle) = subtitle {
            ui.add_space(16.0 + motion::enter_offset(SlideFrom::Up, subtitle_t, 20.0).y);
            ui.label(
                egui::RichText::new(subtitle)
                    .size(20.0)
                    .color(ui.visuals().weak_text_color().gamma_multiply(subtitle_t)),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_starts_hidden() {
        assert_eq!(enter_progress(0.0, 0.0), 0.0);
        assert_eq!(enter_progress(0.0, SUBTITLE_DELAY), 0.0);
        // Before reveal nothing has entered either.
        assert_eq!(enter_progress(-1.0, 0.0), 0.0);
    }

    #[test]
    fn test_title_finishes_after_its_run_time() {
        assert_eq!(enter_progress(anim::NORMAL, 0.0), 1.0);
        assert_eq!(enter_progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn test_subtitle_lags_the_title() {
        // While the title is mid-entry the subtitle has barely started.
        let title = enter_progress(0.25, 0.0);
        let subtitle = enter_progress(0.25, SUBTITLE_DELAY);
        assert!(title > subtitle);

        // Both are done once the enter window has passed.
        assert_eq!(enter_progress(ENTER_WINDOW, SUBTITLE_DELAY), 1.0);
    }
}
