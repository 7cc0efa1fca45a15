//! Shared UI components.

pub mod nav_bar;
pub mod notice;
pub mod route_guard;
