//! Page content.
//!
//! Sections, projects, and experience entries rendered by the portfolio
//! page. Parallax speeds are kept as raw attribute strings and parsed at
//! startup, so a bad value falls back to the default speed.

pub const SITE_TITLE: &str = "Aryan Sharma - Portfolio";
pub const OWNER: &str = "Aryan Sharma";
pub const TAGLINE: &str = "Software Developer & QA Engineer";
pub const EMAIL: &str = "hello@aryansharma.dev";

/// A top-level page section.
pub struct SectionContent {
    pub id: &'static str,
    pub nav_label: &'static str,
    /// Speed of the section's background layer, if it has one.
    pub parallax_speed: Option<&'static str>,
}

impl SectionContent {
    pub fn layer_id(&self) -> String {
        format!("{}-bg", self.id)
    }
}

pub const SECTIONS: &[SectionContent] = &[
    SectionContent { id: "home", nav_label: "Home", parallax_speed: Some("0.5") },
    SectionContent { id: "about", nav_label: "About", parallax_speed: Some("0.3") },
    SectionContent { id: "skills", nav_label: "Skills", parallax_speed: None },
    SectionContent { id: "projects", nav_label: "Projects", parallax_speed: Some("0.4") },
    SectionContent { id: "experience", nav_label: "Experience", parallax_speed: None },
    SectionContent { id: "contact", nav_label: "Contact", parallax_speed: Some("0.5") },
];

pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        icon: "fas fa-code",
        items: &["Rust", "Python", "JavaScript", "SQL"],
    },
    SkillGroup {
        title: "Backend",
        icon: "fas fa-server",
        items: &["REST APIs", "PostgreSQL", "Docker", "CI/CD"],
    },
    SkillGroup {
        title: "Testing",
        icon: "fas fa-vial",
        items: &["Selenium", "Playwright", "Postman", "Load testing"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Image reference as authored; local names get placeholders.
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Weather Dashboard",
        description: "Forecasts and radar maps with location search and offline caching.",
        image: "images/weather-app.jpg",
        tags: &["JavaScript", "REST", "Charts"],
    },
    Project {
        title: "News Aggregator",
        description: "Personalised headlines pulled from several feeds with keyword filters.",
        image: "images/news-app.jpg",
        tags: &["Python", "Scraping", "SQLite"],
    },
    Project {
        title: "Inventory Backend",
        description: "Service layer and API for stock tracking across warehouses.",
        image: "images/backend.jpg",
        tags: &["Rust", "PostgreSQL", "Docker"],
    },
    Project {
        title: "E-commerce Test Suite",
        description: "End-to-end checkout coverage with visual regression checks.",
        image: "images/ecommerce-testing.jpg",
        tags: &["Playwright", "CI"],
    },
    Project {
        title: "Chatbot QA",
        description: "Conversation flow testing harness with scripted personas.",
        image: "images/chatbot-testing.jpg",
        tags: &["Python", "NLP"],
    },
    Project {
        title: "Logistics Platform Testing",
        description: "Load and contract tests for a route-planning API.",
        image: "images/logistics-testing.jpg",
        tags: &["k6", "Postman"],
    },
];

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        role: "QA Engineer",
        company: "Freight Systems",
        period: "2023 - Present",
        summary: "Owns the automated regression suite for the dispatch platform.",
    },
    Experience {
        role: "Backend Developer Intern",
        company: "Cloudline",
        period: "2022 - 2023",
        summary: "Built internal APIs and migrated batch jobs to a queue-based design.",
    },
];

/// Ids of every element that reveals on scroll, in page order.
pub fn reveal_ids() -> Vec<String> {
    let mut ids = vec!["about-intro".to_string()];
    ids.extend((0..SKILLS.len()).map(|i| format!("skill-{i}")));
    ids.extend((0..PROJECTS.len()).map(|i| format!("project-{i}")));
    ids.extend((0..EXPERIENCE.len()).map(|i| format!("experience-{i}")));
    ids.push("contact-form".to_string());
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique() {
        let ids: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn reveal_ids_are_unique() {
        let ids = reveal_ids();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn every_project_image_has_a_dedicated_placeholder() {
        let map = folio_core::PlaceholderMap::default();
        for project in PROJECTS {
            assert_ne!(
                map.initial_source(project.image),
                folio_core::images::DEFAULT_PLACEHOLDER,
                "{} has no placeholder",
                project.image
            );
        }
    }
}
