//! Page components for Folio.

mod portfolio;

pub use portfolio::Portfolio;
