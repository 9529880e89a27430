//! The session gate: decides between the dashboard and the login page
//! from token presence alone, and re-decides on every token change.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use super::store::{AuthStore, Subscription};

/// Closed set of places the gate can send the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
    Login,
}

impl Destination {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Login => "/login",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Raised by a [`Navigate`] implementation when a transition is
/// rejected by the hosting environment. The gate never retries.
#[derive(Debug, Error)]
#[error("navigation to {destination} failed: {reason}")]
pub struct NavigateError {
    pub destination: Destination,
    pub reason: String,
}

/// Capability to transition the displayed view. Calling it with the
/// route already shown must be safe (a no-op is fine).
pub trait Navigate {
    fn go_to(&self, destination: Destination) -> Result<(), NavigateError>;
}

/// Where a given token routes. Presence is the only signal: an empty
/// token counts as unauthenticated, and no structure is imposed on
/// the contents.
pub fn destination_for(token: Option<&str>) -> Destination {
    match token {
        Some(t) if !t.is_empty() => Destination::Dashboard,
        _ => Destination::Login,
    }
}

/// Redirect effect tied to the lifetime of its host.
///
/// [`SessionGate::mount`] registers a token-change listener, then
/// evaluates once immediately; each change triggers exactly one more
/// `go_to`. Dropping the gate unregisters the listener and suppresses
/// any notification still in flight, so a torn-down host never
/// navigates.
#[derive(Debug)]
pub struct SessionGate {
    active: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl SessionGate {
    /// The first evaluation's failure propagates to the caller; on the
    /// notification path there is no caller, so failures are logged
    /// and dropped.
    pub fn mount(store: &AuthStore, navigator: Rc<dyn Navigate>) -> Result<Self, NavigateError> {
        let active = Rc::new(Cell::new(true));
        let subscription = store.subscribe({
            let navigator = Rc::clone(&navigator);
            let active = Rc::clone(&active);
            move |token| {
                if !active.get() {
                    return;
                }
                if let Err(e) = navigator.go_to(destination_for(token.as_deref())) {
                    tracing::error!("session gate: {e}");
                }
            }
        });

        // Listener is registered first so no change slips between the
        // initial read and the subscription.
        navigator.go_to(destination_for(store.read_token().as_deref()))?;

        Ok(Self {
            active,
            _subscription: subscription,
        })
    }
}

impl Drop for SessionGate {
    fn drop(&mut self) {
        self.active.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        calls: RefCell<Vec<Destination>>,
        fail: Cell<bool>,
    }

    impl RecordingNavigator {
        fn calls(&self) -> Vec<Destination> {
            self.calls.borrow().clone()
        }
    }

    impl Navigate for RecordingNavigator {
        fn go_to(&self, destination: Destination) -> Result<(), NavigateError> {
            if self.fail.get() {
                return Err(NavigateError {
                    destination,
                    reason: "window closed".into(),
                });
            }
            self.calls.borrow_mut().push(destination);
            Ok(())
        }
    }

    #[test]
    fn present_token_routes_to_dashboard() {
        let store = AuthStore::with_token("abc123");
        let nav = Rc::new(RecordingNavigator::default());
        let _gate = SessionGate::mount(&store, nav.clone()).unwrap();
        assert_eq!(nav.calls(), vec![Destination::Dashboard]);
    }

    #[test]
    fn absent_token_routes_to_login() {
        let store = AuthStore::new();
        let nav = Rc::new(RecordingNavigator::default());
        let _gate = SessionGate::mount(&store, nav.clone()).unwrap();
        assert_eq!(nav.calls(), vec![Destination::Login]);
    }

    #[test]
    fn empty_token_counts_as_unauthenticated() {
        let store = AuthStore::with_token("");
        let nav = Rc::new(RecordingNavigator::default());
        let _gate = SessionGate::mount(&store, nav.clone()).unwrap();
        assert_eq!(nav.calls(), vec![Destination::Login]);
    }

    #[test]
    fn logout_triggers_second_navigation_to_login() {
        let store = AuthStore::with_token("abc123");
        let nav = Rc::new(RecordingNavigator::default());
        let _gate = SessionGate::mount(&store, nav.clone()).unwrap();

        store.set_token(None);
        assert_eq!(nav.calls(), vec![Destination::Dashboard, Destination::Login]);
    }

    #[test]
    fn login_triggers_second_navigation_to_dashboard() {
        let store = AuthStore::new();
        let nav = Rc::new(RecordingNavigator::default());
        let _gate = SessionGate::mount(&store, nav.clone()).unwrap();

        store.set_token(Some("xyz".into()));
        assert_eq!(nav.calls(), vec![Destination::Login, Destination::Dashboard]);
    }

    #[test]
    fn unchanged_token_navigates_at_most_once() {
        let store = AuthStore::with_token("abc123");
        let nav = Rc::new(RecordingNavigator::default());
        let _gate = SessionGate::mount(&store, nav.clone()).unwrap();

        store.set_token(Some("abc123".into()));
        store.set_token(Some("abc123".into()));
        assert_eq!(nav.calls(), vec![Destination::Dashboard]);
    }

    #[test]
    fn torn_down_gate_never_navigates() {
        let store = AuthStore::new();
        let nav = Rc::new(RecordingNavigator::default());
        let gate = SessionGate::mount(&store, nav.clone()).unwrap();

        drop(gate);
        store.set_token(Some("abc123".into()));
        assert_eq!(nav.calls(), vec![Destination::Login]);
    }

    #[test]
    fn first_evaluation_failure_propagates() {
        let store = AuthStore::new();
        let nav = Rc::new(RecordingNavigator::default());
        nav.fail.set(true);

        let err = SessionGate::mount(&store, nav.clone()).unwrap_err();
        assert_eq!(err.destination, Destination::Login);
        assert!(nav.calls().is_empty());
    }

    #[test]
    fn notification_path_failure_does_not_unwind() {
        let store = AuthStore::new();
        let nav = Rc::new(RecordingNavigator::default());
        let _gate = SessionGate::mount(&store, nav.clone()).unwrap();

        nav.fail.set(true);
        store.set_token(Some("abc123".into()));

        // Failed attempt is dropped; a later change is evaluated fresh.
        nav.fail.set(false);
        store.set_token(None);
        assert_eq!(nav.calls(), vec![Destination::Login, Destination::Login]);
    }

    #[test]
    fn destination_paths_are_fixed() {
        assert_eq!(Destination::Dashboard.path(), "/dashboard");
        assert_eq!(Destination::Login.path(), "/login");
        assert_eq!(destination_for(Some("abc123")), Destination::Dashboard);
        assert_eq!(destination_for(None), Destination::Login);
    }
}
