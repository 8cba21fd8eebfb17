// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the reveal sequence, the sidebar state, and the
//! scroll tracker, and composes the page out of the section components.

use std::time::{Duration, Instant};

use crate::constants::{self, Section, ThemeMode};
use crate::data;
use crate::ui::sidebar::{self, SidebarAction, SidebarState};
use crate::ui::{about, contact, footer, header, hero, logo, projects, splash};
use crate::util::scroll::ScrollTracker;

/// Reveal sequence states, derived from elapsed time since launch.
///
/// The sequence only moves forward: splash, then the slide-out
/// transition, then the revealed page. Nothing is stored, so dropping
/// the app cancels the sequence with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Splash overlay fully covers the viewport.
    Splash,
    /// Splash is sliding out; chrome and content stay hidden.
    Transitioning,
    /// Sidebar, header, and page content are visible.
    Revealed,
}

impl RevealPhase {
    /// Transition table: the phase for a given time since launch.
    pub fn at(elapsed: Duration) -> Self {
        let ms = elapsed.as_millis();
        if ms < constants::SPLASH_HOLD_MS as u128 {
            RevealPhase::Splash
        } else if ms < constants::CONTENT_REVEAL_MS as u128 {
            RevealPhase::Transitioning
        } else {
            RevealPhase::Revealed
        }
    }

    /// Time until the next phase boundary, if one remains.
    pub fn time_to_next(elapsed: Duration) -> Option<Duration> {
        let boundary = match Self::at(elapsed) {
            RevealPhase::Splash => constants::SPLASH_HOLD_MS,
            RevealPhase::Transitioning => constants::CONTENT_REVEAL_MS,
            RevealPhase::Revealed => return None,
        };
        Some(Duration::from_millis(boundary).saturating_sub(elapsed))
    }
}

/// Main application state.
pub struct FolioApp {
    /// Launch time; drives the reveal sequence.
    started_at: Instant,

    /// Phase observed last frame, for logging transitions.
    last_phase: RevealPhase,

    /// Sidebar menu state.
    sidebar: SidebarState,

    /// Scroll snapshot for the current frame.
    scroll: ScrollTracker,

    /// Section the page should scroll to on the next frame.
    pending_scroll: Option<Section>,

    /// Sidebar logo, decoded at startup.
    logo_texture: Option<egui::TextureHandle>,
}

impl FolioApp {
    /// Create the application, apply the theme, and decode the logo.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(visuals) = visuals_for(constants::THEME) {
            cc.egui_ctx.set_visuals(visuals);
        }

        let logo_texture = match logo::load_texture(&cc.egui_ctx) {
            Ok(texture) => Some(texture),
            Err(e) => {
                log::warn!("Failed to decode sidebar logo: {}", e);
                None
            }
        };

        Self {
            started_at: Instant::now(),
            last_phase: RevealPhase::Splash,
            sidebar: SidebarState::default(),
            scroll: ScrollTracker::default(),
            pending_scroll: None,
            logo_texture,
        }
    }

    /// Apply a sidebar interaction.
    fn apply(&mut self, action: SidebarAction) {
        match action {
            SidebarAction::Toggle => {
                self.sidebar.toggle();
                log::info!(
                    "Sidebar {}",
                    if self.sidebar.open { "opened" } else { "closed" }
                );
            }
            SidebarAction::Navigate(section) => {
                self.pending_scroll = Some(section);
                if self.sidebar.open {
                    self.sidebar.toggle();
                }
            }
            SidebarAction::None => {}
        }
    }

    /// Page content inside the scroll area: hero, about, projects,
    /// contact, footer, in order.
    fn page(&mut self, ui: &mut egui::Ui, viewport_height: f32, reveal_secs: f32) {
        let response = ui
            .scope(|ui| {
                hero::show(
                    ui,
                    "Your Portfolio",
                    Some("Start building your amazing portfolio"),
                    viewport_height,
                    reveal_secs,
                )
            })
            .response;
        self.scroll_to_if_pending(ui, Section::Home, response.rect);

        ui.add_space(80.0);
        let response = ui.scope(about::show).response;
        self.scroll_to_if_pending(ui, Section::About, response.rect);

        ui.add_space(120.0);
        let response = ui.scope(|ui| projects::show(ui, data::projects())).response;
        self.scroll_to_if_pending(ui, Section::Projects, response.rect);

        ui.add_space(120.0);
        let response = ui.scope(contact::show).response;
        self.scroll_to_if_pending(ui, Section::Contact, response.rect);

        ui.add_space(80.0);
        footer::show(ui);
    }

    fn scroll_to_if_pending(&mut self, ui: &mut egui::Ui, section: Section, rect: egui::Rect) {
        if self.pending_scroll == Some(section) {
            ui.scroll_to_rect(rect, Some(egui::Align::Min));
            self.pending_scroll = None;
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let elapsed = self.started_at.elapsed();
        let phase = RevealPhase::at(elapsed);
        if phase != self.last_phase {
            log::info!("Reveal phase: {:?}", phase);
            self.last_phase = phase;
        }

        let revealed = phase == RevealPhase::Revealed;

        // Sidebar rail (left), slides in on reveal.
        let mut action = SidebarAction::None;
        if let Some(inner) = egui::SidePanel::left("sidebar_rail")
            .exact_width(constants::SIDEBAR_RAIL_WIDTH)
            .resizable(false)
            .show_animated(ctx, revealed, |ui| {
                sidebar::rail(ui, self.sidebar.open, self.logo_texture.as_ref())
            })
        {
            action = inner.inner;
        }

        // Header (top), hidden while scrolling down past the hero.
        let header_visible = revealed
            && !(self.scroll.scrolling_down
                && self.scroll.offset > constants::HEADER_AUTOHIDE_OFFSET);
        let mut nav_target = None;
        if let Some(inner) = egui::TopBottomPanel::top("header")
            .show_animated(ctx, header_visible, |ui| header::show(ui, &self.scroll))
        {
            nav_target = inner.inner;
        }

        // Page content (center).
        let reveal_secs =
            elapsed.as_secs_f32() - constants::CONTENT_REVEAL_MS as f32 / 1000.0;
        let scroll_output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if !revealed {
                    // Bare background behind the splash.
                    return None;
                }
                let viewport_height = ui.available_rect_before_wrap().height();
                Some(
                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .show(ui, |ui| self.page(ui, viewport_height, reveal_secs)),
                )
            })
            .inner;

        // Feed the scroll tracker once per frame; the frame is the
        // sampling boundary for the derived values.
        if let Some(output) = scroll_output {
            let scrollable = output.content_size.y - output.inner_rect.height();
            self.scroll.update(output.state.offset.y, scrollable);
        }

        self.apply(action);
        if revealed {
            let overlay_action = sidebar::nav_overlay(ctx, self.sidebar.open);
            self.apply(overlay_action);
        }
        if let Some(section) = nav_target {
            self.apply(SidebarAction::Navigate(section));
        }

        // Splash overlay and repaint scheduling for the timed sequence.
        match phase {
            RevealPhase::Splash => {
                splash::show(ctx, 0.0);
                if let Some(remaining) = RevealPhase::time_to_next(elapsed) {
                    ctx.request_repaint_after(remaining);
                }
            }
            RevealPhase::Transitioning => {
                let exit_t = (elapsed.as_millis() - constants::SPLASH_HOLD_MS as u128) as f32
                    / constants::SPLASH_EXIT_MS as f32;
                splash::show(ctx, exit_t);
                ctx.request_repaint();
            }
            RevealPhase::Revealed => {
                // Keep repainting through the section enter animations.
                if reveal_secs < hero::ENTER_WINDOW {
                    ctx.request_repaint();
                }
            }
        }
    }
}

fn visuals_for(theme: ThemeMode) -> Option<egui::Visuals> {
    match theme {
        ThemeMode::Light => Some(egui::Visuals::light()),
        ThemeMode::Dark => Some(egui::Visuals::dark()),
        // Keep eframe's platform-following default.
        ThemeMode::System => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_ms(ms: u64) -> RevealPhase {
        RevealPhase::at(Duration::from_millis(ms))
    }

    #[test]
    fn test_splash_is_visible_from_launch() {
        assert_eq!(at_ms(0), RevealPhase::Splash);
        assert_eq!(at_ms(4999), RevealPhase::Splash);
    }

    #[test]
    fn test_splash_hides_at_hold_boundary() {
        assert_eq!(at_ms(5000), RevealPhase::Transitioning);
        assert_eq!(at_ms(5499), RevealPhase::Transitioning);
    }

    #[test]
    fn test_content_reveals_at_reveal_boundary() {
        assert_eq!(at_ms(5500), RevealPhase::Revealed);
        assert_eq!(at_ms(3_600_000), RevealPhase::Revealed);
    }

    #[test]
    fn test_phases_only_move_forward() {
        fn rank(phase: RevealPhase) -> u8 {
            match phase {
                RevealPhase::Splash => 0,
                RevealPhase::Transitioning => 1,
                RevealPhase::Revealed => 2,
            }
        }

        let mut prev = 0;
        for ms in (0..8000).step_by(100) {
            let current = rank(at_ms(ms));
            assert!(current >= prev);
            prev = current;
        }
    }

    #[test]
    fn test_time_to_next_boundary() {
        assert_eq!(
            RevealPhase::time_to_next(Duration::from_millis(0)),
            Some(Duration::from_millis(5000))
        );
        assert_eq!(
            RevealPhase::time_to_next(Duration::from_millis(5200)),
            Some(Duration::from_millis(300))
        );
        assert_eq!(RevealPhase::time_to_next(Duration::from_millis(6000)), None);
    }
}
