//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting and export helpers are pure; browser concerns (clock, blob
//! download, `localStorage`) are isolated behind `hydrate`-gated wrappers.

pub mod csv;
pub mod dark_mode;
pub mod format;
