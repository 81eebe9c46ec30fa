//! Shared page state for Folio.
//!
//! The root component owns the scroll context, the latest layout snapshot,
//! and the placeholder map; children reach them through the hooks below.
//!
//! Every scroll event writes the scroll context, so components that render
//! from it subscribe through the memo hooks (`use_nav_state`,
//! `use_revealed`, ...) and re-render only when their own slice changes.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let ctx = use_scroll_context();
//! let active = ctx.read().nav.active_link().map(|l| l.target.clone());
//! ```

use dioxus::prelude::*;
use folio_core::{
    NavLink, NavState, ParallaxLayer, ParallaxSpeed, PlaceholderMap, ScrollContext,
    SimulatedTransport, SiteSettings, StaticLayout,
};

use crate::content::{reveal_ids, SECTIONS};

/// Get the site settings chosen at startup.
pub fn get_settings() -> SiteSettings {
    crate::get_settings()
}

/// Build the scroll context for the page content.
///
/// Links follow section order, every section with a configured speed gets
/// a background layer, and every reveal element is watched from the start.
pub fn build_scroll_context(settings: SiteSettings) -> ScrollContext {
    let links = SECTIONS
        .iter()
        .map(|s| NavLink::new(s.id, s.nav_label))
        .collect();
    let default_speed = settings.default_parallax_speed;
    let mut ctx = ScrollContext::new(settings, links);

    for section in SECTIONS.iter().filter(|s| s.parallax_speed.is_some()) {
        ctx.register_layer(ParallaxLayer {
            id: section.layer_id(),
            section_id: Some(section.id.to_string()),
            speed: ParallaxSpeed::parse(section.parallax_speed, default_speed),
        });
    }
    for id in reveal_ids() {
        ctx.reveal.observe(id);
    }
    ctx
}

/// Placeholder map with any configured overrides applied.
pub fn build_placeholders(settings: &SiteSettings) -> PlaceholderMap {
    PlaceholderMap::with_overrides(&settings.placeholders)
}

/// Transport used by the contact form.
pub fn build_transport(settings: &SiteSettings) -> SimulatedTransport {
    match crate::get_simulated_failure() {
        Some(reason) => SimulatedTransport::failing(settings.send_latency(), reason),
        None => SimulatedTransport::new(settings.send_latency()),
    }
}

/// Hook to access the scroll-driven UI state.
pub fn use_scroll_context() -> Signal<ScrollContext> {
    use_context::<Signal<ScrollContext>>()
}

/// Hook to access the most recent layout snapshot reported by the page.
pub fn use_layout() -> Signal<StaticLayout> {
    use_context::<Signal<StaticLayout>>()
}

/// Navbar and menu flags.
pub fn use_nav_state() -> Memo<NavState> {
    let ctx = use_scroll_context();
    use_memo(move || ctx.read().nav.state())
}

/// Navigation links with their active flags.
pub fn use_nav_links() -> Memo<Vec<NavLink>> {
    let ctx = use_scroll_context();
    use_memo(move || ctx.read().nav.links().to_vec())
}

/// Whether the reveal element `id` has been revealed.
pub fn use_revealed(id: String) -> Memo<bool> {
    let ctx = use_scroll_context();
    use_memo(move || ctx.read().reveal.is_revealed(&id))
}

/// Speed and last applied offset of a parallax layer.
pub fn use_parallax_layer(layer_id: String) -> Memo<(Option<f64>, Option<f64>)> {
    let ctx = use_scroll_context();
    use_memo(move || parallax_layer_view(&ctx.read(), &layer_id))
}

pub fn parallax_layer_view(ctx: &ScrollContext, layer_id: &str) -> (Option<f64>, Option<f64>) {
    let speed = ctx
        .parallax
        .layers()
        .iter()
        .find(|l| l.id == layer_id)
        .map(|l| l.speed.value());
    (speed, ctx.parallax.applied_offset(layer_id))
}

pub fn use_placeholders() -> PlaceholderMap {
    use_context::<PlaceholderMap>()
}

pub fn use_transport() -> SimulatedTransport {
    use_context::<SimulatedTransport>()
}
