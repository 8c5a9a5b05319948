// caja-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-process calls against an axum Router

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::error::{ClientError, ClientResult};

use super::http::{HttpClient, REQUEST_ID_HEADER, decode_body, error_from_status};

/// Oneshot HTTP client (in-memory calls)
///
/// Drives a `Router` with Tower's `oneshot`, for embedding a backend in
/// the same process and for tests. No network involved.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use caja_client::OneshotHttpClient;
///
/// let router: Router = build_backend();
/// let client = OneshotHttpClient::new(router);
/// let productos: Vec<Producto> = client.get("/api/productos").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Option<String>,
}

impl OneshotHttpClient {
    /// # Arguments
    /// * `router` - Router with its state already applied
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: None,
        }
    }

    fn build_request(&self, method: Method, path: &str, body: Body) -> ClientResult<Request<Body>> {
        let uri = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(REQUEST_ID_HEADER, uuid::Uuid::new_v4().to_string());

        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {e}")))
    }

    fn request_with_body<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let bytes = serde_json::to_vec(body)?;
        self.build_request(method, path, Body::from(bytes))
    }

    /// Execute a request and return the raw body of a successful response
    async fn execute_raw(&self, request: Request<Body>) -> ClientResult<Vec<u8>> {
        tracing::debug!(method = %request.method(), uri = %request.uri(), "Oneshot request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {e}")))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(error_from_status(status, &bytes));
        }
        Ok(bytes.to_vec())
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let bytes = self.execute_raw(request).await?;
        decode_body(&bytes)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, Body::empty())?;
        self.execute(request).await
    }

    async fn get_bytes(&self, path: &str) -> ClientResult<Vec<u8>> {
        let request = self.build_request(Method::GET, path, Body::empty())?;
        self.execute_raw(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.request_with_body(Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::POST, path, Body::empty())?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.request_with_body(Method::PUT, path, body)?;
        self.execute(request).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.request_with_body(Method::PATCH, path, body)?;
        self.execute(request).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.build_request(Method::DELETE, path, Body::empty())?;
        self.execute_raw(request).await?;
        Ok(())
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}
