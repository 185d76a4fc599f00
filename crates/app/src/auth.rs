use dioxus::prelude::*;
use shared_types::Principal;

/// Session snapshot shared across the component tree.
///
/// `loading` is true only until the auth stream's first emission; after that
/// it stays false for the rest of the session. Mutated exclusively by the
/// resolver coroutine in `App`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<Principal>>,
    pub loading: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            loading: Signal::new(true),
        }
    }

    /// Apply one auth-stream emission: set the principal and clear `loading`.
    pub fn apply(&mut self, principal: Option<Principal>) {
        self.current_user.set(principal);
        self.loading.set(false);
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }
}

/// Hook to access the session snapshot.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to check if the current principal derives the admin role.
pub fn use_is_admin() -> bool {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding.as_ref().map(Principal::is_admin).unwrap_or(false)
}
