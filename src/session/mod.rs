//! Session-gated navigation core.
//!
//! Framework-agnostic: the store, the gate and the `Navigate`
//! capability know nothing about Dioxus, so the whole module is
//! testable without a hosting window.

pub mod gate;
pub mod store;

pub use gate::{Destination, Navigate, NavigateError, SessionGate};
pub use store::{AuthStore, Subscription};
