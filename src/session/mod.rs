//! Session lifecycle: credential persistence, identity cache, idle watchdog,
//! and the navigation gate.
//!
//! ARCHITECTURE
//! ============
//! `credentials` is the only module touching the persisted token;
//! `store` is the only module mutating the in-memory identity;
//! `resolver` serializes concurrent identity fetches into one request;
//! `idle` force-terminates inactive sessions; `gate` decides whether a
//! navigation may commit. All state lives in an explicitly constructed
//! `SessionContext` passed down via Leptos context, not an ambient global.

pub mod credentials;
pub mod gate;
pub mod idle;
pub mod resolver;
pub mod store;
