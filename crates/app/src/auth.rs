use dioxus::prelude::*;
use shared_types::{AppError, SessionUser};

/// What a consumer of the auth provider can see and do.
///
/// Components receive an implementation through their props and treat it
/// as read-only: they read the user and may ask for a logout, nothing more.
pub trait AuthSession: Clone + PartialEq + 'static {
    /// The signed-in user, `None` when signed out or not loaded yet.
    fn user(&self) -> Option<SessionUser>;

    /// Ask the provider to end the session. Fire-and-forget.
    fn logout(&self);
}

/// Global authentication state owned by the application shell.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<SessionUser>>,
    on_logout: Callback<()>,
}

impl AuthState {
    pub fn new(current_user: Signal<Option<SessionUser>>, on_logout: Callback<()>) -> Self {
        Self {
            current_user,
            on_logout,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: SessionUser) {
        self.current_user.set(Some(user));
    }
}

impl AuthSession for AuthState {
    fn user(&self) -> Option<SessionUser> {
        self.current_user.read().clone()
    }

    fn logout(&self) {
        self.on_logout.call(());
    }
}

/// Look up the ambient auth state, reporting a missing provider as an error.
pub fn try_use_auth() -> Result<AuthState, AppError> {
    try_use_context::<AuthState>().ok_or_else(|| {
        AppError::configuration("AuthState was not provided by an ancestor component")
    })
}

/// Hook to access auth state.
///
/// A missing provider is a wiring mistake in the shell, so this aborts
/// rendering instead of showing a header with no session behind it.
pub fn use_auth() -> AuthState {
    match try_use_auth() {
        Ok(auth) => auth,
        Err(err) => {
            tracing::error!(%err, "auth provider missing");
            panic!("{err}");
        }
    }
}
