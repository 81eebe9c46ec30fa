//! Parallax Section Component
//!
//! A page section with an optional background layer that moves at its own
//! speed while the section is on screen.

use dioxus::prelude::*;
use folio_core::parallax::transform_css;

use crate::context::use_parallax_layer;

#[component]
pub fn ParallaxSection(
    /// Section id, also the navigation target
    id: String,
    #[props(default = None)] class: Option<String>,
    children: Element,
) -> Element {
    let layer = use_parallax_layer(format!("{}-bg", id));
    let (speed, offset) = layer();
    // Layers keep their last transform while off screen
    let style = offset
        .map(|offset| format!("transform: {};", transform_css(offset)))
        .unwrap_or_default();

    let section_class = match class {
        Some(extra) => format!("section {}", extra),
        None => "section".to_string(),
    };

    rsx! {
        section { id: "{id}", class: "{section_class}",
            if let Some(speed) = speed {
                div {
                    class: "parallax-bg",
                    "data-speed": "{speed}",
                    style: "{style}",
                }
            }
            div { class: "container", {children} }
        }
    }
}
