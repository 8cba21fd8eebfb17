// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shared constants and small UI types.
//!
//! This module defines animation timings, layout breakpoints, the page
//! section table used by navigation, and the theme selection.

/// Animation durations in seconds.
pub mod anim {
    pub const FAST: f32 = 0.3;
    pub const NORMAL: f32 = 0.5;
    pub const SLOW: f32 = 0.8;
    /// Hamburger icon morph between bar and cross geometry.
    pub const HAMBURGER_MORPH: f32 = 0.6;
}

/// Layout breakpoints in points, matching the usual small-to-2xl ladder.
pub mod breakpoint {
    pub const SM: f32 = 640.0;
    pub const MD: f32 = 768.0;
    pub const LG: f32 = 1024.0;
    pub const XL: f32 = 1280.0;
    pub const XXL: f32 = 1536.0;
}

/// How long the splash screen holds before sliding out, in milliseconds.
pub const SPLASH_HOLD_MS: u64 = 5000;

/// How long the splash slide-out transition runs, in milliseconds.
pub const SPLASH_EXIT_MS: u64 = 500;

/// When the sidebar and page content reveal, in milliseconds.
///
/// Derived from the hold and exit windows so the content can never appear
/// while the splash is still animating out.
pub const CONTENT_REVEAL_MS: u64 = SPLASH_HOLD_MS + SPLASH_EXIT_MS;

/// Width of the fixed sidebar rail.
pub const SIDEBAR_RAIL_WIDTH: f32 = 80.0;

/// Width of the slide-in navigation panel.
pub const NAV_PANEL_WIDTH: f32 = 264.0;

/// Scroll offset past which the header hides while scrolling down.
pub const HEADER_AUTOHIDE_OFFSET: f32 = 64.0;

/// Splash screen background, a dark olive.
pub const SPLASH_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(61, 64, 45);

/// Theme applied at startup.
pub const THEME: ThemeMode = ThemeMode::Dark;

/// Color scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    /// Defer to the platform's reported preference.
    System,
}

/// Page sections, in page order. Navigation targets are drawn from this
/// table so anchors always match a section that exists on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Display label used by navigation links.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// In-page anchor target for this section.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::About => "#about",
            Section::Projects => "#projects",
            Section::Contact => "#contact",
        }
    }

    /// Route path for this section.
    pub fn route(self) -> &'static str {
        match self {
            Section::Home => "/",
            Section::About => "/about",
            Section::Projects => "/projects",
            Section::Contact => "/contact",
        }
    }
}

/// Sections linked from the header, left to right.
pub const HEADER_NAV: [Section; 3] = [Section::Home, Section::Projects, Section::Contact];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_reveals_after_splash_finishes() {
        // The reveal must not land inside the splash exit window.
        assert!(CONTENT_REVEAL_MS >= SPLASH_HOLD_MS + SPLASH_EXIT_MS);
    }

    #[test]
    fn test_anchors_match_section_labels() {
        for section in Section::ALL {
            let anchor = section.anchor();
            assert!(anchor.starts_with('#'));
            assert_eq!(anchor[1..], section.label().to_lowercase());
        }
    }

    #[test]
    fn test_routes_correspond_to_sections() {
        for section in Section::ALL {
            let route = section.route();
            assert!(route.starts_with('/'));
            let tail = &route[1..];
            if section == Section::Home {
                assert!(tail.is_empty());
            } else {
                assert_eq!(tail, section.label().to_lowercase());
            }
        }
    }

    #[test]
    fn test_header_nav_is_subset_of_sections() {
        for section in HEADER_NAV {
            assert!(Section::ALL.contains(&section));
        }
    }

    #[test]
    fn test_breakpoints_are_increasing() {
        assert!(breakpoint::SM < breakpoint::MD);
        assert!(breakpoint::MD < breakpoint::LG);
        assert!(breakpoint::LG < breakpoint::XL);
        assert!(breakpoint::XL < breakpoint::XXL);
    }
}
