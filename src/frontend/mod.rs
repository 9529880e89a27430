//! Frontend module for the Paperdock application.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
