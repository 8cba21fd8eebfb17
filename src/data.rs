// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Static portfolio content.
//!
//! The project list is built once on first access and lives for the
//! lifetime of the process. Display order is declaration order.

use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::models::project::{Project, ProjectLinks};

static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        Project {
            id: "1".to_string(),
            title: "Example Project".to_string(),
            description: "A sample project to get you started".to_string(),
            technologies: vec![
                "Next.js".to_string(),
                "TypeScript".to_string(),
                "Tailwind CSS".to_string(),
            ],
            image_url: None,
            links: Some(ProjectLinks {
                live: Some("https://example.com".to_string()),
                github: Some("https://github.com".to_string()),
                demo: None,
            }),
            featured: true,
            created_at: date(2024, 1, 1),
        },
        Project {
            id: "2".to_string(),
            title: "Folio".to_string(),
            description: "This portfolio itself, an immediate-mode GUI application".to_string(),
            technologies: vec!["Rust".to_string(), "egui".to_string(), "eframe".to_string()],
            image_url: None,
            links: Some(ProjectLinks {
                github: Some("https://github.com/yourusername/folio".to_string()),
                ..Default::default()
            }),
            featured: false,
            created_at: date(2024, 6, 15),
        },
        Project {
            id: "3".to_string(),
            title: "Ray Marcher".to_string(),
            description: "Signed-distance-field renderer with a small scene language".to_string(),
            technologies: vec!["Rust".to_string(), "wgpu".to_string()],
            image_url: Some("/ray-marcher.png".to_string()),
            links: Some(ProjectLinks {
                demo: Some("https://example.com/ray-marcher".to_string()),
                ..Default::default()
            }),
            featured: false,
            created_at: date(2024, 9, 30),
        },
        Project {
            id: "4".to_string(),
            title: "Pixel Sorter".to_string(),
            description: "Glitch-art batch tool for sorting pixel runs by luminance".to_string(),
            technologies: vec!["Rust".to_string(), "image".to_string()],
            image_url: None,
            links: None,
            featured: false,
            created_at: date(2025, 2, 12),
        },
    ]
});

/// The portfolio's project list, in display order.
pub fn projects() -> &'static [Project] {
    &PROJECTS
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_are_unique() {
        let ids: HashSet<&str> = projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn test_list_order_is_declaration_order() {
        let ids: Vec<&str> = projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_seed_entry_matches_expected_card() {
        let first = &projects()[0];
        assert_eq!(first.title, "Example Project");
        assert!(first.featured);
        assert_eq!(first.visible_links().len(), 2);
    }

    #[test]
    fn test_optional_field_space_is_exercised() {
        // At least one entry with no links and one with a single link, so
        // the card's conditional rendering paths stay covered.
        assert!(projects().iter().any(|p| p.links.is_none()));
        assert!(projects().iter().any(|p| p.visible_links().len() == 1));
    }
}
