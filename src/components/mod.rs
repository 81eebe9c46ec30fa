//! UI Components for Folio.

mod contact_form;
mod navbar;
mod parallax_section;
mod project_image;
mod reveal;
mod scroll_controls;

pub use contact_form::ContactForm;
pub use navbar::Navbar;
pub use parallax_section::ParallaxSection;
pub use project_image::ProjectImage;
pub use reveal::Reveal;
pub use scroll_controls::{BackToTop, ScrollProgress};
