//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session state lives in `crate::session`; this module holds the thin
//! consumers — derived audit statistics and transient UI state.

pub mod audits;
pub mod ui;
