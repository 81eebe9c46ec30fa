use dioxus::prelude::*;
use folio_core::StaticLayout;

use crate::bridge::use_page_bridge;
use crate::context::{
    build_placeholders, build_scroll_context, build_transport, get_settings,
};
use crate::pages::Portfolio;
use crate::theme::{FONT_AWESOME, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, the scroll context, and the page bridge.
#[component]
pub fn App() -> Element {
    let settings = use_hook(get_settings);

    // Shared page state
    let scroll_context = use_signal(|| build_scroll_context(settings.clone()));
    let layout: Signal<StaticLayout> = use_signal(StaticLayout::default);

    use_context_provider(|| scroll_context);
    use_context_provider(|| layout);
    use_context_provider(|| build_placeholders(&settings));
    use_context_provider(|| build_transport(&settings));

    // Start listening to the page once it is mounted
    use_page_bridge(scroll_context, layout);

    rsx! {
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        style { {GLOBAL_STYLES} }
        Portfolio {}
    }
}
