//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Protected pages wrap their content in `Protected`, which defers rendering
//! until the navigation gate allows it; pages themselves only read session
//! predicates and call the API through the gateway.

pub mod admin;
pub mod audits;
pub mod dashboard;
pub mod login;
