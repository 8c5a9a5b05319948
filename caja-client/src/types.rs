//! Type markers for CajaClient's typestate pattern.
//!
//! Resource APIs only exist on `CajaClient<_, Authenticated>`, so a call
//! without a token is a compile error rather than a 401.

use shared::client::Usuario;

/// No token yet.
///
/// Available transitions:
/// - `login()` or `restore_session()` -> Authenticated
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

/// Holds a bearer token accepted by the server.
///
/// Available operations: `me()`, `logout()` and every resource API.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated;

/// Sealed trait for session states.
pub trait SessionState: private::Sealed + Send + Sync + 'static {}
impl SessionState for Anonymous {}
impl SessionState for Authenticated {}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Anonymous {}
    impl Sealed for super::Authenticated {}
}

/// Session data kept in memory during the client's lifecycle.
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    pub token: Option<String>,
    pub usuario: Option<Usuario>,
}

impl SessionData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token and user after a successful login.
    pub fn set_login(&mut self, token: String, usuario: Usuario) {
        self.token = Some(token);
        self.usuario = Some(usuario);
    }

    /// Clears the session data on logout.
    pub fn clear(&mut self) {
        self.token = None;
        self.usuario = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn usuario(&self) -> Option<&Usuario> {
        self.usuario.as_ref()
    }
}
