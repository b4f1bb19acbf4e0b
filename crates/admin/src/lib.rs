//! Rosterly Admin - unified back-office client for the team roster.
//!
//! Layering follows the hexagonal layout: `ports` hold the boundary traits,
//! `application` the services and DTOs, `state` the pure UI-state machines
//! (paged window, infinite scroll, drag reorder, edit workflow),
//! `infrastructure` the concrete adapters, and `ui` the Dioxus presentation.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;
pub mod ui;
