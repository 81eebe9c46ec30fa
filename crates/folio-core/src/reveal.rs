//! Reveal-on-scroll tracking
//!
//! Elements opted into animation are watched for viewport intersection.
//! The first time one intersects it is marked revealed, and it stays
//! revealed for the rest of the session. Watching never stops; later
//! intersection reports are no-ops.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{SiteSettings, REVEAL_BOTTOM_MARGIN, REVEAL_THRESHOLD};

/// CSS class applied to revealed elements.
pub const REVEALED_CLASS: &str = "aos-animate";

/// Intersection watcher configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction required to count as intersecting.
    pub threshold: f64,
    /// How far above the viewport bottom the trigger line sits.
    pub bottom_margin: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            bottom_margin: REVEAL_BOTTOM_MARGIN,
        }
    }
}

impl RevealOptions {
    pub fn from_settings(settings: &SiteSettings) -> Self {
        Self {
            threshold: settings.reveal_threshold,
            bottom_margin: settings.reveal_bottom_margin,
        }
    }

    /// Root margin in CSS shorthand: top, right, bottom, left.
    ///
    /// The bottom edge only ever shrinks; negative or NaN margins count as 0.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin.max(0.0))
    }
}

/// One report from the intersection watcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub id: String,
    pub is_intersecting: bool,
    #[serde(default)]
    pub ratio: f64,
}

/// Revealed state of every watched element.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    elements: BTreeMap<String, bool>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching an element. Watching it again keeps its state.
    pub fn observe(&mut self, id: impl Into<String>) {
        self.elements.entry(id.into()).or_insert(false);
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.elements.get(id).copied().unwrap_or(false)
    }

    pub fn watched(&self) -> usize {
        self.elements.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.elements.values().filter(|r| **r).count()
    }

    /// Apply a batch of watcher reports.
    ///
    /// Returns the ids revealed by this batch, in report order. Reports
    /// for unwatched elements and non-intersecting reports are ignored.
    pub fn apply(&mut self, entries: &[IntersectionEntry]) -> Vec<String> {
        let mut newly = Vec::new();
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            match self.elements.get_mut(&entry.id) {
                Some(revealed) if !*revealed => {
                    *revealed = true;
                    tracing::debug!(id = %entry.id, ratio = entry.ratio, "Element revealed");
                    newly.push(entry.id.clone());
                }
                Some(_) => {}
                None => {
                    tracing::debug!(id = %entry.id, "Intersection report for unwatched element");
                }
            }
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, is_intersecting: bool) -> IntersectionEntry {
        IntersectionEntry {
            id: id.to_string(),
            is_intersecting,
            ratio: if is_intersecting { 0.2 } else { 0.0 },
        }
    }

    #[test]
    fn default_options() {
        let opts = RevealOptions::default();
        assert_eq!(opts.threshold, 0.1);
        assert_eq!(opts.root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn root_margin_never_doubles_the_sign() {
        let opts = RevealOptions { threshold: 0.1, bottom_margin: -20.0 };
        assert_eq!(opts.root_margin(), "0px 0px -0px 0px");
        let opts = RevealOptions { threshold: 0.1, bottom_margin: f64::NAN };
        assert_eq!(opts.root_margin(), "0px 0px -0px 0px");
    }

    #[test]
    fn first_intersection_reveals() {
        let mut tracker = RevealTracker::new();
        tracker.observe("about-card");
        assert!(!tracker.is_revealed("about-card"));

        let newly = tracker.apply(&[entry("about-card", true)]);
        assert_eq!(newly, vec!["about-card".to_string()]);
        assert!(tracker.is_revealed("about-card"));
    }

    #[test]
    fn reveal_never_reverts() {
        let mut tracker = RevealTracker::new();
        tracker.observe("a");
        tracker.apply(&[entry("a", true)]);
        let newly = tracker.apply(&[entry("a", false), entry("a", true)]);
        assert!(newly.is_empty());
        assert!(tracker.is_revealed("a"));
    }

    #[test]
    fn reobserving_keeps_state() {
        let mut tracker = RevealTracker::new();
        tracker.observe("a");
        tracker.apply(&[entry("a", true)]);
        tracker.observe("a");
        assert!(tracker.is_revealed("a"));
        assert_eq!(tracker.watched(), 1);
    }

    #[test]
    fn unwatched_reports_are_ignored() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.apply(&[entry("ghost", true)]).is_empty());
        assert!(!tracker.is_revealed("ghost"));
        assert_eq!(tracker.revealed_count(), 0);
    }
}
