//! Parallax transform engine
//!
//! Background layers move at a fraction of the scroll speed. Each layer
//! belongs to a section; while that section is in view the layer is
//! translated by `-(scroll_y - section_top) * speed`. Layers of sections
//! out of view keep whatever transform they had last.
//!
//! Recomputation is tied to animation frames. Any number of scroll events
//! between two frames schedule exactly one update, through [`FrameGate`].

use std::collections::BTreeMap;

use crate::layout::{LayoutProvider, SectionBounds};

/// Speed factor of a parallax layer. `0.5` moves at half scroll speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxSpeed(f64);

impl ParallaxSpeed {
    pub fn new(speed: f64) -> Self {
        Self(speed)
    }

    /// Parse a markup attribute value.
    ///
    /// A missing, empty, or non-numeric value falls back to `default`.
    pub fn parse(raw: Option<&str>, default: f64) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self(default);
        };
        match raw.parse::<f64>() {
            Ok(speed) if speed.is_finite() => {
                if !(0.1..=1.0).contains(&speed) {
                    tracing::debug!(speed, "Parallax speed outside the recommended 0.1..=1.0 range");
                }
                Self(speed)
            }
            _ => {
                tracing::warn!(raw, default, "Unparsable parallax speed, using default");
                Self(default)
            }
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Vertical offset of a layer for the given scroll position.
pub fn parallax_offset(scroll_y: f64, section_top: f64, speed: f64) -> f64 {
    -(scroll_y - section_top) * speed
}

/// CSS transform for a vertical offset.
pub fn transform_css(offset: f64) -> String {
    format!("translate3d(0, {}px, 0)", offset)
}

/// Coalesces scroll events into at most one update per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    /// Called on every scroll event. Returns `true` when the caller should
    /// schedule a frame; `false` when one is already pending.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Called once the scheduled frame has run its update.
    pub fn complete(&mut self) {
        self.ticking = false;
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }
}

/// A background layer registered with the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxLayer {
    pub id: String,
    /// Enclosing section. Layers outside any section never move.
    pub section_id: Option<String>,
    pub speed: ParallaxSpeed,
}

/// Transform to apply to one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxUpdate {
    pub id: String,
    pub offset: f64,
}

impl ParallaxUpdate {
    pub fn transform(&self) -> String {
        transform_css(self.offset)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParallaxEngine {
    layers: Vec<ParallaxLayer>,
    applied: BTreeMap<String, f64>,
}

impl ParallaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, layer: ParallaxLayer) {
        if let Some(existing) = self.layers.iter_mut().find(|l| l.id == layer.id) {
            *existing = layer;
        } else {
            self.layers.push(layer);
        }
    }

    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    /// Last offset applied to a layer, if it was ever in view.
    pub fn applied_offset(&self, id: &str) -> Option<f64> {
        self.applied.get(id).copied()
    }

    /// Recompute offsets for every layer whose section is in view.
    pub fn update(&mut self, layout: &impl LayoutProvider) -> Vec<ParallaxUpdate> {
        let viewport = layout.viewport();
        let mut updates = Vec::new();

        for layer in &self.layers {
            let Some(section) = layer
                .section_id
                .as_deref()
                .and_then(|id| layout.section(id))
            else {
                continue;
            };
            if !section.intersects(&viewport) {
                continue;
            }
            let offset = layer_offset(viewport.scroll_y, section, layer.speed);
            self.applied.insert(layer.id.clone(), offset);
            updates.push(ParallaxUpdate {
                id: layer.id.clone(),
                offset,
            });
        }

        tracing::trace!(scroll_y = viewport.scroll_y, moved = updates.len(), "Parallax frame");
        updates
    }
}

fn layer_offset(scroll_y: f64, section: &SectionBounds, speed: ParallaxSpeed) -> f64 {
    parallax_offset(scroll_y, section.top, speed.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticLayout;

    fn layout() -> StaticLayout {
        StaticLayout::new(
            800.0,
            vec![
                SectionBounds::new("home", 0.0, 1000.0),
                SectionBounds::new("projects", 1000.0, 1200.0),
                SectionBounds::new("contact", 2200.0, 900.0),
            ],
        )
    }

    fn layer(id: &str, section: &str, speed: f64) -> ParallaxLayer {
        ParallaxLayer {
            id: id.to_string(),
            section_id: Some(section.to_string()),
            speed: ParallaxSpeed::new(speed),
        }
    }

    #[test]
    fn offset_formula() {
        assert_eq!(parallax_offset(150.0, 100.0, 0.5), -25.0);
        assert_eq!(parallax_offset(0.0, 100.0, 0.5), 50.0);
        assert_eq!(parallax_offset(100.0, 100.0, 0.3), 0.0);
    }

    #[test]
    fn speed_parsing() {
        assert_eq!(ParallaxSpeed::parse(Some("0.3"), 0.5).value(), 0.3);
        assert_eq!(ParallaxSpeed::parse(None, 0.5).value(), 0.5);
        assert_eq!(ParallaxSpeed::parse(Some(""), 0.5).value(), 0.5);
        assert_eq!(ParallaxSpeed::parse(Some("fast"), 0.5).value(), 0.5);
        assert_eq!(ParallaxSpeed::parse(Some("NaN"), 0.5).value(), 0.5);
        assert_eq!(ParallaxSpeed::parse(Some(" 0.8 "), 0.5).value(), 0.8);
    }

    #[test]
    fn transform_string() {
        assert_eq!(transform_css(-25.0), "translate3d(0, -25px, 0)");
        assert_eq!(transform_css(12.5), "translate3d(0, 12.5px, 0)");
    }

    #[test]
    fn frame_gate_coalesces_requests() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        gate.complete();
        assert!(!gate.is_ticking());
        assert!(gate.request());
    }

    #[test]
    fn only_visible_sections_move() {
        let mut engine = ParallaxEngine::new();
        engine.register(layer("home-bg", "home", 0.5));
        engine.register(layer("contact-bg", "contact", 0.5));

        let updates = engine.update(&layout().scrolled_to(150.0));
        assert_eq!(
            updates,
            vec![ParallaxUpdate {
                id: "home-bg".to_string(),
                offset: -75.0
            }]
        );
        assert_eq!(engine.applied_offset("contact-bg"), None);
    }

    #[test]
    fn off_screen_layers_keep_last_transform() {
        let mut engine = ParallaxEngine::new();
        engine.register(layer("home-bg", "home", 0.5));

        engine.update(&layout().scrolled_to(400.0));
        assert_eq!(engine.applied_offset("home-bg"), Some(-200.0));

        let updates = engine.update(&layout().scrolled_to(2500.0));
        assert!(updates.is_empty());
        assert_eq!(engine.applied_offset("home-bg"), Some(-200.0));
    }

    #[test]
    fn initial_pass_positions_layers_below_the_fold() {
        let mut engine = ParallaxEngine::new();
        engine.register(layer("projects-bg", "projects", 0.5));

        // Section starts 200px below the viewport top edge and is partly visible
        let updates = engine.update(&layout().scrolled_to(800.0));
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].offset, 100.0);
    }

    #[test]
    fn layers_without_section_are_skipped() {
        let mut engine = ParallaxEngine::new();
        engine.register(ParallaxLayer {
            id: "floating".to_string(),
            section_id: None,
            speed: ParallaxSpeed::new(0.5),
        });
        engine.register(layer("lost", "no-such-section", 0.5));
        assert!(engine.update(&layout()).is_empty());
    }

    #[test]
    fn reregistering_replaces_layer() {
        let mut engine = ParallaxEngine::new();
        engine.register(layer("bg", "home", 0.5));
        engine.register(layer("bg", "home", 0.2));
        assert_eq!(engine.layers().len(), 1);
        assert_eq!(engine.layers()[0].speed.value(), 0.2);
    }
}
