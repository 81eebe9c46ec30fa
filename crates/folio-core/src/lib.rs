//! Folio Core Library
//!
//! Scroll-driven UI state for a single-page portfolio.
//!
//! ## Overview
//!
//! Nothing in this crate renders anything. Each concern is modelled as
//! plain state plus transition functions, fed by a [`LayoutProvider`] that
//! reports scroll position, viewport size, and section bounds:
//!
//! - **nav**: mobile menu, link targets, "scrolled" navbar, active link
//! - **parallax**: per-layer offsets, coalesced to one update per frame
//! - **reveal**: one-way reveal of elements entering the viewport
//! - **contact**: form validation and the send/restore state machine
//! - **images**: placeholder substitution for missing project images
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{NavLink, ScrollContext, SectionBounds, SiteSettings, StaticLayout};
//!
//! let layout = StaticLayout::new(
//!     800.0,
//!     vec![
//!         SectionBounds::new("home", 0.0, 900.0),
//!         SectionBounds::new("about", 900.0, 700.0),
//!     ],
//! );
//! let mut ctx = ScrollContext::new(
//!     SiteSettings::default(),
//!     vec![NavLink::new("home", "Home"), NavLink::new("about", "About")],
//! );
//!
//! let effects = ctx.on_scroll(&layout.scrolled_to(850.0));
//! assert_eq!(effects.active.as_deref(), Some("about"));
//! assert!(effects.nav.scrolled);
//! ```

pub mod config;
pub mod contact;
pub mod debounce;
pub mod error;
pub mod images;
pub mod layout;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod scroll;

// Re-exports
pub use config::SiteSettings;
pub use contact::{
    expire_message, submit_form, FormHandle, FormMachine, FormMessage, FormPhase, FormSubmission,
    MessageKind, SimulatedTransport, SubmissionTransport, SubmitButton, SubmitOutcome,
};
pub use debounce::Debouncer;
pub use error::{FolioError, FolioResult};
pub use images::{ImageSource, PlaceholderMap};
pub use layout::{LayoutProvider, SectionBounds, StaticLayout, Viewport};
pub use nav::{NavController, NavLink, NavState};
pub use parallax::{FrameGate, ParallaxEngine, ParallaxLayer, ParallaxSpeed, ParallaxUpdate};
pub use reveal::{IntersectionEntry, RevealOptions, RevealTracker};
pub use scroll::{scroll_percentage, ScrollContext, ScrollEffects};
