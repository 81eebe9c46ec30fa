//! Navigation state
//!
//! Mobile menu toggling, link click resolution, the navbar "scrolled"
//! flag, and active-link highlighting.

use crate::config::SiteSettings;
use crate::layout::{LayoutProvider, SectionBounds};

/// A navigation link pointing at an on-page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Target section id, without the leading `#`.
    pub target: String,
    pub label: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            label: label.into(),
            active: false,
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// Flags reflected as classes on the navbar and mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

/// The section containing the probe line, if any.
///
/// The probe sits `probe_offset` below the scroll position. Sections are
/// scanned in document order and the last match wins, so abutting or
/// overlapping sections resolve deterministically.
pub fn active_section(
    sections: &[SectionBounds],
    scroll_y: f64,
    probe_offset: f64,
) -> Option<&SectionBounds> {
    let probe = scroll_y + probe_offset;
    sections.iter().filter(|s| s.contains(probe)).last()
}

#[derive(Debug, Clone)]
pub struct NavController {
    links: Vec<NavLink>,
    state: NavState,
    navbar_offset: f64,
    scrolled_threshold: f64,
    probe_offset: f64,
}

impl NavController {
    pub fn new(links: Vec<NavLink>, settings: &SiteSettings) -> Self {
        Self {
            links,
            state: NavState::default(),
            navbar_offset: settings.navbar_offset,
            scrolled_threshold: settings.scrolled_threshold,
            probe_offset: settings.active_probe_offset,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|l| l.active)
    }

    /// Flip the mobile menu. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.state.menu_open = !self.state.menu_open;
        tracing::debug!(open = self.state.menu_open, "Mobile menu toggled");
        self.state.menu_open
    }

    pub fn close_menu(&mut self) {
        self.state.menu_open = false;
    }

    /// Handle a click on a link with the given `href`.
    ///
    /// Always closes the mobile menu. Returns the document offset to
    /// smooth-scroll to, or `None` when the target does not exist.
    pub fn click(&mut self, href: &str, layout: &impl LayoutProvider) -> Option<f64> {
        self.close_menu();

        let Some(target) = href.strip_prefix('#').and_then(|id| layout.section(id)) else {
            tracing::debug!(href, "Navigation target not found");
            return None;
        };
        Some((target.top - self.navbar_offset).max(0.0))
    }

    /// Update navbar styling and the active link for a scroll event.
    pub fn on_scroll(&mut self, layout: &impl LayoutProvider) -> Option<&NavLink> {
        let scroll_y = layout.scroll_y();
        self.state.scrolled = scroll_y > self.scrolled_threshold;

        let current = active_section(layout.sections(), scroll_y, self.probe_offset)
            .map(|s| s.id.as_str());
        for link in &mut self.links {
            link.active = Some(link.target.as_str()) == current;
        }
        self.active_link()
    }
}
