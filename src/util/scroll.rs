// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scroll position tracking.
//!
//! This module derives scroll progress and direction from the raw scroll
//! offset of the page's scroll area. The tracker is fed once per frame,
//! which is also the sampling boundary for the derived values.

/// Snapshot of the page scroll state.
///
/// All four fields are recomputed together by [`ScrollTracker::update`],
/// so a consumer never observes a half-updated snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    /// Current scroll offset in points.
    pub offset: f32,
    /// Offset observed by the previous update.
    pub last_offset: f32,
    /// Offset normalized to the scrollable range, in `[0, 1]` for valid
    /// inputs. Zero when the content does not scroll.
    pub progress: f32,
    /// Whether the last update moved strictly further down the page.
    pub scrolling_down: bool,
}

impl ScrollTracker {
    /// Record a new scroll offset against the current scrollable height.
    ///
    /// `scrollable_height` is the content height minus the viewport
    /// height; non-positive values mean the page cannot scroll.
    pub fn update(&mut self, offset: f32, scrollable_height: f32) {
        self.last_offset = self.offset;
        self.offset = offset;
        self.progress = if scrollable_height > 0.0 {
            offset / scrollable_height
        } else {
            0.0
        };
        self.scrolling_down = offset > self.last_offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_zero_when_not_scrollable() {
        let mut tracker = ScrollTracker::default();
        tracker.update(120.0, 0.0);
        assert_eq!(tracker.progress, 0.0);

        tracker.update(120.0, -50.0);
        assert_eq!(tracker.progress, 0.0);
    }

    #[test]
    fn test_progress_is_offset_over_scrollable_height() {
        let mut tracker = ScrollTracker::default();
        tracker.update(250.0, 1000.0);
        assert_eq!(tracker.progress, 0.25);

        tracker.update(1000.0, 1000.0);
        assert_eq!(tracker.progress, 1.0);
    }

    #[test]
    fn test_scrolling_down_requires_strict_increase() {
        let mut tracker = ScrollTracker::default();

        tracker.update(10.0, 100.0);
        assert!(tracker.scrolling_down);

        // Equal offset is not "down".
        tracker.update(10.0, 100.0);
        assert!(!tracker.scrolling_down);

        tracker.update(5.0, 100.0);
        assert!(!tracker.scrolling_down);

        tracker.update(6.0, 100.0);
        assert!(tracker.scrolling_down);
    }

    #[test]
    fn test_snapshot_fields_update_together() {
        let mut tracker = ScrollTracker::default();
        tracker.update(40.0, 80.0);
        tracker.update(60.0, 80.0);

        assert_eq!(tracker.offset, 60.0);
        assert_eq!(tracker.last_offset, 40.0);
        assert_eq!(tracker.progress, 0.75);
        assert!(tracker.scrolling_down);
    }
}
