// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio page.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hamburger;
pub mod header;
pub mod hero;
pub mod logo;
pub mod projects;
pub mod sidebar;
pub mod splash;
