//! Frontend services for state, data and router plumbing.

pub mod context;
pub mod documents;
pub mod navigation;
