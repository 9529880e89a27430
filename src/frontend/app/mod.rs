pub mod main;

pub use main::{App, Route};
