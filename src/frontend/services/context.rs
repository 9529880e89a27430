//! Authentication context and state management.

use crate::session::AuthStore;

/// App-wide auth context. Wraps the injectable [`AuthStore`] so pages
/// share one token container through the component tree.
#[derive(Clone, Default)]
pub struct AuthState {
    pub store: AuthStore,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Usernames are 3-16 characters, letters, numbers and underscores.
    pub fn is_valid_username(name: &str) -> bool {
        (3..=16).contains(&name.len())
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Starts a session for the given username. The username doubles
    /// as the opaque session token; the gate only cares that one is
    /// present.
    pub fn login(&self, username: &str) -> Result<(), String> {
        if !Self::is_valid_username(username) {
            return Err(
                "Username must be 3-16 characters long and can only contain letters, numbers, and underscores"
                    .to_string(),
            );
        }
        self.store.set_token(Some(username.to_string()));
        Ok(())
    }

    /// Ends the current session.
    pub fn logout(&self) {
        self.store.set_token(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.read_token().is_some_and(|t| !t.is_empty())
    }

    /// Gets the current username or returns "Guest" as default.
    pub fn get_username(&self) -> String {
        self.store
            .read_token()
            .unwrap_or_else(|| "Guest".to_string())
    }
}
