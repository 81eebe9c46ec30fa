//! Reveal-on-scroll wrapper
//!
//! Wraps content that animates in the first time it enters the viewport.
//! The page script watches every `[data-aos]` element and reports back by
//! `data-reveal-id`.

use dioxus::prelude::*;
use folio_core::reveal::REVEALED_CLASS;

use crate::context::use_revealed;

#[component]
pub fn Reveal(
    /// Id the watcher reports this element under
    id: String,
    /// Animation name, matched by the stylesheet
    #[props(default = "fade-up".to_string())]
    animation: String,
    #[props(default = None)] class: Option<String>,
    children: Element,
) -> Element {
    let revealed = use_revealed(id.clone());
    let revealed = revealed();

    let base = class.unwrap_or_default();
    let full_class = match (base.is_empty(), revealed) {
        (true, true) => REVEALED_CLASS.to_string(),
        (true, false) => String::new(),
        (false, true) => format!("{} {}", base, REVEALED_CLASS),
        (false, false) => base,
    };

    rsx! {
        div {
            class: "{full_class}",
            "data-aos": "{animation}",
            "data-reveal-id": "{id}",
            {children}
        }
    }
}
