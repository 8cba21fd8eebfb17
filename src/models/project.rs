// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio project records.
//!
//! This module defines the shape of a single portfolio entry and the
//! derivation of which links its card shows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single portfolio entry.
///
/// Constructed once as static data and never mutated; `id` is unique
/// within the project list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Technology tags, in display order.
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
    pub featured: bool,
    pub created_at: NaiveDate,
}

/// External link set for a project. Every field is optional; a card
/// renders only the links that are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

/// Which external link a card button represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Github,
    Live,
    Demo,
}

impl LinkKind {
    /// Button label shown on a project card.
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Github => "GitHub",
            LinkKind::Live => "Live Demo",
            LinkKind::Demo => "Demo",
        }
    }
}

impl Project {
    /// Links to render on this project's card, in display order.
    ///
    /// Returns nothing when the project has no link set at all.
    pub fn visible_links(&self) -> Vec<(LinkKind, &str)> {
        let mut out = Vec::new();
        if let Some(links) = &self.links {
            if let Some(url) = &links.github {
                out.push((LinkKind::Github, url.as_str()));
            }
            if let Some(url) = &links.live {
                out.push((LinkKind::Live, url.as_str()));
            }
            if let Some(url) = &links.demo {
                out.push((LinkKind::Demo, url.as_str()));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Project {
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
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_no_link_set_renders_no_links() {
        let mut project = sample();
        project.links = None;
        assert!(project.visible_links().is_empty());
    }

    #[test]
    fn test_github_only_renders_single_source_link() {
        let mut project = sample();
        project.links = Some(ProjectLinks {
            github: Some("https://github.com/example".to_string()),
            ..Default::default()
        });

        let links = project.visible_links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].0, LinkKind::Github);
        assert_eq!(links[0].0.label(), "GitHub");
    }

    #[test]
    fn test_example_project_card_contract() {
        // End-to-end scenario: one card, source + live links, three tag
        // chips in listed order.
        let project = sample();
        assert_eq!(project.title, "Example Project");
        assert_eq!(
            project.technologies,
            ["Next.js", "TypeScript", "Tailwind CSS"]
        );

        let links = project.visible_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], (LinkKind::Github, "https://github.com"));
        assert_eq!(links[1], (LinkKind::Live, "https://example.com"));
    }

    #[test]
    fn test_empty_link_set_still_renders_no_links() {
        let mut project = sample();
        project.links = Some(ProjectLinks::default());
        assert!(project.visible_links().is_empty());
    }

    #[test]
    fn test_project_serde_roundtrip() {
        let project = sample();
        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(project, back);
    }
}
