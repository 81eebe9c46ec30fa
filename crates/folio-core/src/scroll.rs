//! Scroll-driven UI state
//!
//! [`ScrollContext`] owns every piece of state that reacts to scrolling:
//! navigation flags, the parallax engine and its frame gate, and the reveal
//! tracker. Handlers receive the context instead of sharing loose globals.

use crate::config::SiteSettings;
use crate::layout::LayoutProvider;
use crate::nav::{NavController, NavLink, NavState};
use crate::parallax::{FrameGate, ParallaxEngine, ParallaxLayer, ParallaxUpdate};
use crate::reveal::{IntersectionEntry, RevealOptions, RevealTracker};

/// What a single scroll event changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollEffects {
    pub nav: NavState,
    /// Target of the active link after this event.
    pub active: Option<String>,
    /// Whether the caller must schedule an animation frame.
    pub frame_requested: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollContext {
    pub settings: SiteSettings,
    pub nav: NavController,
    pub parallax: ParallaxEngine,
    pub reveal: RevealTracker,
    gate: FrameGate,
}

impl ScrollContext {
    pub fn new(settings: SiteSettings, links: Vec<NavLink>) -> Self {
        let nav = NavController::new(links, &settings);
        Self {
            settings,
            nav,
            parallax: ParallaxEngine::new(),
            reveal: RevealTracker::new(),
            gate: FrameGate::default(),
        }
    }

    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions::from_settings(&self.settings)
    }

    pub fn register_layer(&mut self, layer: ParallaxLayer) {
        self.parallax.register(layer);
    }

    /// First pass at load, before any scroll event.
    pub fn initialize(&mut self, layout: &impl LayoutProvider) -> Vec<ParallaxUpdate> {
        let updates = self.refresh(layout);
        tracing::info!(
            layers = self.parallax.layers().len(),
            watched = self.reveal.watched(),
            "Scroll context initialized"
        );
        updates
    }

    /// Recompute everything for a new layout, bypassing the frame gate.
    ///
    /// Used at load and after the page is re-measured (resize).
    pub fn refresh(&mut self, layout: &impl LayoutProvider) -> Vec<ParallaxUpdate> {
        self.nav.on_scroll(layout);
        self.parallax.update(layout)
    }

    /// Handle a scroll event.
    ///
    /// Navigation state is updated right away; parallax work is deferred to
    /// the next frame and requested at most once per frame.
    pub fn on_scroll(&mut self, layout: &impl LayoutProvider) -> ScrollEffects {
        let active = self.nav.on_scroll(layout).map(|l| l.target.clone());
        ScrollEffects {
            nav: self.nav.state(),
            active,
            frame_requested: self.gate.request(),
        }
    }

    /// Run the deferred parallax update for a scheduled frame.
    pub fn run_frame(&mut self, layout: &impl LayoutProvider) -> Vec<ParallaxUpdate> {
        let updates = self.parallax.update(layout);
        self.gate.complete();
        updates
    }

    /// Drop a frame request that will never run.
    pub fn cancel_frame(&mut self) {
        self.gate.complete();
    }

    pub fn frame_pending(&self) -> bool {
        self.gate.is_ticking()
    }

    pub fn apply_intersections(&mut self, entries: &[IntersectionEntry]) -> Vec<String> {
        self.reveal.apply(entries)
    }
}

/// How far down the document the viewport is, in percent.
///
/// A document no taller than the viewport reports 0.
pub fn scroll_percentage(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Scroll progress for a layout snapshot.
pub fn layout_scroll_percentage(layout: &impl LayoutProvider) -> f64 {
    scroll_percentage(layout.scroll_y(), layout.document_height(), layout.viewport_height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{SectionBounds, StaticLayout};
    use crate::parallax::ParallaxSpeed;

    fn layout() -> StaticLayout {
        StaticLayout::new(
            600.0,
            vec![
                SectionBounds::new("home", 0.0, 600.0),
                SectionBounds::new("about", 600.0, 600.0),
            ],
        )
    }

    fn context() -> ScrollContext {
        let mut ctx = ScrollContext::new(
            SiteSettings::default(),
            vec![NavLink::new("home", "Home"), NavLink::new("about", "About")],
        );
        ctx.register_layer(ParallaxLayer {
            id: "about-bg".to_string(),
            section_id: Some("about".to_string()),
            speed: ParallaxSpeed::new(0.5),
        });
        ctx
    }

    #[test]
    fn scroll_burst_requests_one_frame() {
        let mut ctx = context();
        let first = ctx.on_scroll(&layout().scrolled_to(10.0));
        let second = ctx.on_scroll(&layout().scrolled_to(20.0));
        let third = ctx.on_scroll(&layout().scrolled_to(30.0));
        assert!(first.frame_requested);
        assert!(!second.frame_requested);
        assert!(!third.frame_requested);
        assert!(ctx.frame_pending());

        ctx.run_frame(&layout().scrolled_to(30.0));
        assert!(!ctx.frame_pending());
        assert!(ctx.on_scroll(&layout().scrolled_to(40.0)).frame_requested);
    }

    #[test]
    fn cancelled_frame_can_be_requested_again() {
        let mut ctx = context();
        assert!(ctx.on_scroll(&layout().scrolled_to(10.0)).frame_requested);
        ctx.cancel_frame();
        assert!(!ctx.frame_pending());
        assert!(ctx.on_scroll(&layout().scrolled_to(20.0)).frame_requested);
    }

    #[test]
    fn nav_updates_are_immediate() {
        let mut ctx = context();
        let effects = ctx.on_scroll(&layout().scrolled_to(550.0));
        assert!(effects.nav.scrolled);
        assert_eq!(effects.active.as_deref(), Some("about"));
    }

    #[test]
    fn initialize_positions_visible_layers() {
        let mut ctx = context();
        let updates = ctx.initialize(&layout().scrolled_to(300.0));
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].offset, 150.0);
        assert!(!ctx.frame_pending());
    }

    #[test]
    fn percentage() {
        assert_eq!(scroll_percentage(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_percentage(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_percentage(1000.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_percentage(10.0, 500.0, 1000.0), 0.0);
        assert_eq!(layout_scroll_percentage(&layout().scrolled_to(300.0)), 50.0);
    }
}
