//! Navigation Bar Component
//!
//! Fixed top bar with section links. On narrow screens the links collapse
//! into a menu opened by the toggle button.

use dioxus::prelude::*;
use folio_core::NavLink;

use crate::bridge::PageCommand;
use crate::content::OWNER;
use crate::context::{use_layout, use_nav_links, use_nav_state, use_scroll_context};

/// Navigation bar
///
/// Gets the `scrolled` class once the page is scrolled past the threshold,
/// and highlights the link of the section currently under the probe line.
#[component]
pub fn Navbar() -> Element {
    let mut ctx = use_scroll_context();
    let state = use_nav_state();
    let state = state();
    let links = use_nav_links();
    let links = links();

    rsx! {
        nav {
            id: "navbar",
            class: if state.scrolled { "navbar scrolled" } else { "navbar" },

            div { class: "nav-container",
                a { class: "nav-logo", href: "#home", "{OWNER}" }

                ul {
                    id: "navMenu",
                    class: if state.menu_open { "nav-menu active" } else { "nav-menu" },
                    for link in links {
                        NavItem { key: "{link.target}", link: link.clone() }
                    }
                }

                button {
                    id: "navToggle",
                    class: if state.menu_open { "nav-toggle active" } else { "nav-toggle" },
                    "aria-label": "Toggle navigation",
                    "aria-expanded": "{state.menu_open}",
                    onclick: move |_| {
                        ctx.write().nav.toggle_menu();
                    },
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}

/// Single navigation link
///
/// Clicking closes the mobile menu and smooth-scrolls so the section top
/// lands just below the navbar. Unknown targets do nothing.
#[component]
fn NavItem(link: NavLink) -> Element {
    let mut ctx = use_scroll_context();
    let layout = use_layout();
    let bridge = use_coroutine_handle::<PageCommand>();
    let href = link.href();

    let onclick = {
        let href = href.clone();
        move |evt: MouseEvent| {
            evt.prevent_default();
            let target = ctx.write().nav.click(&href, &*layout.read());
            if let Some(top) = target {
                bridge.send(PageCommand::ScrollTo { top });
            }
        }
    };

    rsx! {
        li {
            a {
                class: if link.active { "nav-link active" } else { "nav-link" },
                href: "{href}",
                onclick: onclick,
                "{link.label}"
            }
        }
    }
}
