//! Scroll progress bar and back-to-top button

use dioxus::prelude::*;
use folio_core::scroll::layout_scroll_percentage;

use crate::bridge::PageCommand;
use crate::context::{use_layout, use_nav_state};

#[component]
pub fn ScrollProgress() -> Element {
    let layout = use_layout();
    let percent = layout_scroll_percentage(&*layout.read());

    rsx! {
        div {
            class: "scroll-progress",
            role: "progressbar",
            "aria-valuenow": "{percent:.0}",
            style: "width: {percent}%;",
        }
    }
}

/// Appears together with the scrolled navbar styling
#[component]
pub fn BackToTop() -> Element {
    let bridge = use_coroutine_handle::<PageCommand>();
    let nav = use_nav_state();
    let visible = nav().scrolled;

    rsx! {
        button {
            class: if visible { "back-to-top visible" } else { "back-to-top" },
            "aria-label": "Back to top",
            onclick: move |_| bridge.send(PageCommand::ScrollTo { top: 0.0 }),
            i { class: "fas fa-arrow-up" }
        }
    }
}
