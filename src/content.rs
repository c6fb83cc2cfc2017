// SPDX-License-Identifier: PMPL-1.0-or-later

//! The content catalog: every item the portfolio displays.

use crate::data;
use crate::error::SiteError;
use crate::i18n::Section;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCatalog {
    pub profile: Profile,
    #[serde(default)]
    pub web_projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub design_projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub work: Vec<WorkRecord>,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
}

impl ContentCatalog {
    /// Replace the built-in catalog with one read from a JSON, YAML or TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SiteError> {
        data::load(path)
    }

    /// The records shown under one projects tab.
    pub fn projects(&self, tab: ProjectTab) -> &[ProjectRecord] {
        match tab {
            ProjectTab::Web => &self.web_projects,
            ProjectTab::Design => &self.design_projects,
        }
    }

    /// Every content key the catalog refers to, grouped by bundle section.
    pub fn keys(&self) -> Vec<(Section, &str)> {
        let mut keys = Vec::new();
        keys.extend(self.education.iter().map(|e| (Section::Education, e.key.as_str())));
        keys.extend(self.work.iter().map(|w| (Section::Work, w.key.as_str())));
        for tab in ProjectTab::all() {
            keys.extend(self.projects(*tab).iter().map(|p| (Section::Projects, p.key.as_str())));
        }
        keys
    }

    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                web_projects_url: "https://github.com/ivanmayoraldev".into(),
                design_projects_url: "https://www.behance.net/ivanmayoralvfx".into(),
            },
            web_projects: vec![
                ProjectRecord {
                    key: "dawflix".into(),
                    title: "Netflix Clone (working on)".into(),
                    description: "A Netflix clone developed in Interface Design, focusing on enhancing functional design with Figma and collaborative teamwork.".into(),
                    technologies: strings(&["JavaScript", "TypeScript", "SCSS", "Figma"]),
                    img: "DawFlix.png".into(),
                    github_link: Some("https://github.com/ivanmayoraldev/dawflix".into()),
                    preview_link: Some("https://project1-example.com".into()),
                },
                ProjectRecord {
                    key: "artus".into(),
                    title: "Art Us (working on)".into(),
                    description: "Art Us is a global platform for artists to share, collaborate, monetize, and innovate, creating an inclusive and collaborative artistic community.".into(),
                    technologies: strings(&["React", "Python", "PostGreSQL", "TailwindCSS"]),
                    img: "ArtUs.png".into(),
                    github_link: Some("https://github.com/ivanmayoraldev/Art-Us".into()),
                    preview_link: Some("https://project2-example.com".into()),
                },
            ],
            design_projects: vec![
                ProjectRecord {
                    key: "thebliss".into(),
                    title: "The Bliss".into(),
                    description: "Another project that highlights my expertise in backend development with Node.js and MongoDB.".into(),
                    technologies: strings(&["Premiere Pro", "Davinci Resolve", "Google Ads"]),
                    img: "TheBliss.png".into(),
                    github_link: None,
                    preview_link: Some("https://project2-example.com".into()),
                },
                ProjectRecord {
                    key: "peereira7".into(),
                    title: "Peereira7".into(),
                    description: "Video editing, banner and thumbnail design. Social media management for 3 years.".into(),
                    technologies: strings(&["Premiere Pro", "After Effects", "Photoshop"]),
                    img: "Peereira7.png".into(),
                    github_link: None,
                    preview_link: Some("https://www.youtube.com/@Peereira7".into()),
                },
            ],
            work: vec![WorkRecord {
                id: 1,
                key: "peereira7".into(),
                time: "2021 - 2024".into(),
                company_url: "https://youtube.com/@Peereira7".into(),
                company_name: "Peereira7 Channel".into(),
                location: "Madrid, Spain".into(),
                title: "VFX & GFX Creator | Channel Manager".into(),
                description: "Led creative direction and production for a successful YouTube channel with over 3 years of experience in video editing, motion graphics, and visual effects. Managed social media presence, designed thumbnails and banners, and coordinated content strategy. Developed expertise in Adobe Creative Suite, DaVinci Resolve, and After Effects while building a strong portfolio of digital content.".into(),
                technologies: strings(&[
                    "Adobe Creative Suite",
                    "DaVinci Resolve",
                    "After Effects",
                    "Premiere Pro",
                    "Photoshop",
                    "Social Media Management",
                ]),
                achievements: strings(&[
                    "Managed successful YouTube channel with consistent content strategy",
                    "Created high-quality thumbnails and banners for video content",
                    "Developed expertise in video editing and motion graphics",
                    "Coordinated social media presence across multiple platforms",
                ]),
            }],
            education: vec![
                EducationRecord {
                    key: "computerEngineering".into(),
                    title: "Computer Engineering".into(),
                    details: strings(&["Currently pursuing the first year of Computer Engineering degree, focusing on the Software Engineering track. This comprehensive program covers advanced software development methodologies, system architecture design, database management, and emerging technologies like AI and cloud computing. The curriculum emphasizes practical problem-solving skills and industry-standard development practices."]),
                },
                EducationRecord {
                    key: "daw".into(),
                    title: "Web Application Development (DAW)".into(),
                    details: strings(&["Design web pages and deploy/install applications on servers with browser and server programming, using the most in-demand professional technologies."]),
                },
            ],
        }
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_select_their_own_lists() {
        let catalog = ContentCatalog::builtin();
        let web: Vec<&str> = catalog.projects(ProjectTab::Web).iter().map(|p| p.key.as_str()).collect();
        let design: Vec<&str> = catalog
            .projects(ProjectTab::Design)
            .iter()
            .map(|p| p.key.as_str())
            .collect();
        assert_eq!(web, vec!["dawflix", "artus"]);
        assert_eq!(design, vec!["thebliss", "peereira7"]);
    }

    #[test]
    fn keys_cover_every_section() {
        let catalog = ContentCatalog::builtin();
        let keys = catalog.keys();
        assert!(keys.contains(&(Section::Work, "peereira7")));
        assert!(keys.contains(&(Section::Projects, "peereira7")));
        assert!(keys.contains(&(Section::Education, "daw")));
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn catalog_loads_from_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("content.toml");
        std::fs::write(
            &path,
            r#"
[profile]
webProjectsUrl = "https://example.com/code"
designProjectsUrl = "https://example.com/art"

[[webProjects]]
key = "demo"
title = "Demo"
description = "A demo project"
img = "demo.png"
"#,
        )
        .expect("write");
        let catalog = ContentCatalog::from_file(&path).expect("toml catalog");
        assert_eq!(catalog.web_projects.len(), 1);
        assert_eq!(catalog.web_projects[0].github_link, None);
        assert!(catalog.design_projects.is_empty());
        assert_eq!(catalog.profile.more_projects_url(ProjectTab::Design), "https://example.com/art");
    }
}
