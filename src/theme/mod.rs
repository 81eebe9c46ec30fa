//! Theme for Folio.

mod styles;

pub use styles::{FONT_AWESOME, GLOBAL_STYLES};
