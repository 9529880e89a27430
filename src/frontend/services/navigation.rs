//! Router-backed implementation of the gate's `Navigate` capability.

use crate::session::{Destination, Navigate, NavigateError};

use dioxus_router::Navigator;

/// Bridges [`SessionGate`](crate::session::SessionGate) to the dioxus
/// router. Uses `replace` so the gate page never lands in history and
/// the back button cannot loop through it.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    nav: Navigator,
}

impl RouterNavigator {
    pub fn new(nav: Navigator) -> Self {
        Self { nav }
    }
}

impl Navigate for RouterNavigator {
    fn go_to(&self, destination: Destination) -> Result<(), NavigateError> {
        match self.nav.replace(destination.path()) {
            None => Ok(()),
            Some(failure) => Err(NavigateError {
                destination,
                reason: format!("{failure:?}"),
            }),
        }
    }
}
