//! Injectable session token container.
//!
//! Single writer (the login/logout flow), any number of readers.
//! Everything runs on the UI thread, so interior mutability is
//! `Rc<RefCell>` rather than a lock.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(Option<String>)>;

#[derive(Default)]
struct Inner {
    token: Option<String>,
    subscribers: Vec<(u64, Listener)>,
    next_id: u64,
}

/// Holds the current session token and notifies subscribers when it
/// actually changes. Cloning shares the same underlying state.
#[derive(Clone, Default)]
pub struct AuthStore {
    inner: Rc<RefCell<Inner>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().token = Some(token.into());
        store
    }

    /// Snapshot of the current token.
    pub fn read_token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    /// Replaces the token. Subscribers are notified only if the value
    /// actually changed; setting the same token again is a no-op.
    pub fn set_token(&self, token: Option<String>) {
        // Snapshot the listeners and release the borrow before
        // calling out, so a listener may read or write the store.
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.token == token {
                return;
            }
            inner.token = token.clone();
            inner.subscribers.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener(token.clone());
        }
    }

    /// Registers a change listener. The listener stays registered
    /// until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(Option<String>) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(listener)));
        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }
}

/// Scoped handle for a registered listener; dropping it unregisters
/// the listener. Outliving the store is fine, the drop then does
/// nothing.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    store: Weak<RefCell<Inner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.borrow_mut().subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}
