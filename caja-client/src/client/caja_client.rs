//! Typestate session wrapper around an [`HttpClient`].

use std::marker::PhantomData;

use shared::client::{LoginRequest, LoginResponse, Usuario};

use crate::error::{ClientError, ClientResult};
use crate::types::{Anonymous, Authenticated, SessionData, SessionState};

use super::http::HttpClient;

/// A type-safe client for the POS backend.
///
/// - `H` is the transport (`NetworkHttpClient` or `OneshotHttpClient`)
/// - `S` is the session state (`Anonymous` or `Authenticated`)
///
/// # Example
///
/// ```no_run
/// use caja_client::{CajaClient, ClientConfig};
///
/// # async fn example() -> Result<(), caja_client::ClientError> {
/// let http = ClientConfig::from_env().build_http_client()?;
/// let client = CajaClient::new(http).login("caja@tienda.pe", "secreto").await?;
/// let productos = client.productos().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CajaClient<H: HttpClient, S: SessionState = Anonymous> {
    pub(crate) http: H,
    pub(crate) session: SessionData,
    _state: PhantomData<S>,
}

impl<H: HttpClient, S: SessionState> CajaClient<H, S> {
    /// Transport in use
    pub fn http(&self) -> &H {
        &self.http
    }

    pub fn session(&self) -> &SessionData {
        &self.session
    }

    fn transition<T: SessionState>(self) -> CajaClient<H, T> {
        CajaClient {
            http: self.http,
            session: self.session,
            _state: PhantomData,
        }
    }
}

// ============================================================================
// Anonymous State
// ============================================================================

impl<H: HttpClient> CajaClient<H, Anonymous> {
    /// Wrap a transport. Any token already set on it is dropped.
    pub fn new(mut http: H) -> Self {
        http.set_token(None);
        Self {
            http,
            session: SessionData::new(),
            _state: PhantomData,
        }
    }

    /// Logs in with email and password (`POST /api/auth/login`).
    pub async fn login(
        mut self,
        email: &str,
        password: &str,
    ) -> Result<CajaClient<H, Authenticated>, ClientError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        if request.email.is_empty() || request.password.is_empty() {
            return Err(ClientError::Validation(
                "email y contraseña son obligatorios".into(),
            ));
        }

        tracing::info!(email = %request.email, "Logging in");
        let response: LoginResponse = self.http.post("/api/auth/login", &request).await?;

        self.http.set_token(Some(response.token.clone()));
        self.session.set_login(response.token, response.usuario);
        tracing::info!("Logged in successfully");
        Ok(self.transition())
    }

    /// Restores a session from a cached token.
    ///
    /// The token is checked against `GET /api/auth/me`; a rejected token
    /// fails with the server's error and nothing is kept.
    pub async fn restore_session(
        mut self,
        token: impl Into<String>,
    ) -> Result<CajaClient<H, Authenticated>, ClientError> {
        let token = token.into();
        self.http.set_token(Some(token.clone()));

        match self.http.get::<Usuario>("/api/auth/me").await {
            Ok(usuario) => {
                tracing::info!(usuario = %usuario.email, "Session restored from cache");
                self.session.set_login(token, usuario);
                Ok(self.transition())
            }
            Err(e) => {
                self.http.set_token(None);
                Err(e)
            }
        }
    }
}

// ============================================================================
// Authenticated State
// ============================================================================

impl<H: HttpClient> CajaClient<H, Authenticated> {
    /// Current user from the server (`GET /api/auth/me`)
    pub async fn me(&self) -> ClientResult<Usuario> {
        self.http.get("/api/auth/me").await
    }

    /// Bearer token of this session
    pub fn token(&self) -> &str {
        self.session.token().unwrap_or_default()
    }

    /// User returned at login
    pub fn usuario(&self) -> Option<&Usuario> {
        self.session.usuario()
    }

    /// Logs out. The local session is cleared even if the server call fails.
    pub async fn logout(mut self) -> CajaClient<H, Anonymous> {
        if let Err(e) = self
            .http
            .post_empty::<serde_json::Value>("/api/auth/logout")
            .await
        {
            tracing::warn!(error = %e, "Server logout failed, clearing local session anyway");
        }
        self.http.set_token(None);
        self.session.clear();
        tracing::info!("Logged out");
        self.transition()
    }
}
