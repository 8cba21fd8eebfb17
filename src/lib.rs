// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! FOLIO - Personal portfolio application
//!
//! The page is composed of a hero banner, an about blurb, a project
//! showcase grid, and a contact section, framed by a sidebar rail and a
//! header. On launch a splash screen covers the viewport, slides out
//! after a fixed hold, and the chrome and content reveal shortly after.

pub mod app;
pub mod constants;
pub mod data;
pub mod models;
pub mod ui;
pub mod util;
