//! Project Image Component
//!
//! Shows a project screenshot, falling back to a remote placeholder when
//! the local file is not bundled or fails to load.

use dioxus::prelude::*;
use folio_core::ImageSource;

use crate::context::use_placeholders;

#[component]
pub fn ProjectImage(
    /// Source as authored; local names resolve to placeholders right away
    src: String,
    /// Alt text for accessibility
    alt: String,
) -> Element {
    let placeholders = use_placeholders();
    let mut image = use_signal(|| ImageSource::new(src.clone(), &placeholders));

    rsx! {
        div { class: "project-image",
            img {
                src: "{image.read().current()}",
                alt: "{alt}",
                "loading": "lazy",
                onerror: move |_| image.write().handle_error(&placeholders),
            }
        }
    }
}
