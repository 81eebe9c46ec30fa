//! Portfolio page - the whole site on one scrolling page.
//!
//! Hero, about, skills, projects, experience, and contact sections, in
//! the order the navigation lists them.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::{
    BackToTop, ContactForm, Navbar, ParallaxSection, ProjectImage, Reveal, ScrollProgress,
};
use crate::content::{EMAIL, EXPERIENCE, OWNER, PROJECTS, SKILLS, TAGLINE};

#[component]
pub fn Portfolio() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        ScrollProgress {}
        Navbar {}

        main {
            ParallaxSection { id: "home", class: "hero",
                h1 { class: "hero-title", "{OWNER}" }
                p { class: "hero-subtitle", "{TAGLINE}" }
                div { class: "hero-buttons",
                    a { class: "btn btn-primary", href: "#projects", "View My Work" }
                    a { class: "btn btn-secondary", href: "#contact", "Get In Touch" }
                }
            }

            ParallaxSection { id: "about",
                h2 { class: "section-title", "About Me" }
                Reveal { id: "about-intro",
                    p { class: "about-text",
                        "I build backend services and the test suites that keep them honest. "
                        "Most of my work sits where development meets quality: APIs, "
                        "automation, and the tooling that ties them together."
                    }
                }
            }

            ParallaxSection { id: "skills",
                h2 { class: "section-title", "Skills" }
                div { class: "skills-grid",
                    for (idx, group) in SKILLS.iter().enumerate() {
                        Reveal { key: "{idx}", id: format!("skill-{idx}"), class: "skill-card".to_string(),
                            i { class: "{group.icon}" }
                            h3 { "{group.title}" }
                            ul {
                                for item in group.items.iter() {
                                    li { "{item}" }
                                }
                            }
                        }
                    }
                }
            }

            ParallaxSection { id: "projects",
                h2 { class: "section-title", "Projects" }
                div { class: "projects-grid",
                    for (i, project) in PROJECTS.iter().enumerate() {
                        Reveal { key: "{i}", id: format!("project-{i}"), class: "project-card".to_string(),
                            ProjectImage { src: project.image.to_string(), alt: project.title.to_string() }
                            div { class: "project-info",
                                h3 { "{project.title}" }
                                p { "{project.description}" }
                                div { class: "project-tags",
                                    for tag in project.tags.iter() {
                                        span { class: "tag", "{tag}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            ParallaxSection { id: "experience",
                h2 { class: "section-title", "Experience" }
                div { class: "timeline",
                    for (i, job) in EXPERIENCE.iter().enumerate() {
                        Reveal { key: "{i}", id: format!("experience-{i}"), animation: "fade-left".to_string(), class: "timeline-item".to_string(),
                            h3 { "{job.role}" }
                            p { class: "timeline-meta", "{job.company} | {job.period}" }
                            p { "{job.summary}" }
                        }
                    }
                }
            }

            ParallaxSection { id: "contact",
                h2 { class: "section-title", "Get In Touch" }
                p { class: "contact-intro",
                    "Have a project in mind? Write to "
                    a { href: "mailto:{EMAIL}", "{EMAIL}" }
                    " or use the form below."
                }
                Reveal { id: "contact-form", ContactForm {} }
            }
        }

        footer { class: "footer",
            p { "\u{00A9} {year} {OWNER}. All rights reserved." }
        }

        BackToTop {}
    }
}
