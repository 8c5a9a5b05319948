// caja-client/src/client/http.rs
// HTTP transport - network implementation and shared response handling

use async_trait::async_trait;
use http::{Method, StatusCode};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::{ApiErrorBody, Envelope};
use tracing::Instrument;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Header carrying a per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// HTTP transport trait
///
/// Paths are absolute API paths such as `/api/productos`. Response bodies
/// may be bare JSON or wrapped in `{ "data": ... }`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    /// Raw body, for binary documents such as PDFs
    async fn get_bytes(&self, path: &str) -> ClientResult<Vec<u8>>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    /// Delete a resource; any response body is discarded
    async fn delete(&self, path: &str) -> ClientResult<()>;
    fn token(&self) -> Option<&str>;
    fn set_token(&mut self, token: Option<String>);
}

/// Decode a successful body, bare or wrapped. An empty body reads as `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> ClientResult<T> {
    let bytes: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        bytes
    };
    let envelope: Envelope<T> = serde_json::from_slice(bytes)?;
    Ok(envelope.into_data()?)
}

/// Map a non-2xx response to a `ClientError`
pub(crate) fn error_from_status(status: StatusCode, bytes: &[u8]) -> ClientError {
    let text = String::from_utf8_lossy(bytes).trim().to_string();
    let body = serde_json::from_slice::<ApiErrorBody>(bytes).ok();
    let message = body
        .as_ref()
        .map(|b| b.message.clone())
        .unwrap_or_else(|| text.clone());

    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            match body.and_then(|b| b.errors) {
                Some(errors) => ClientError::Validation(format!("{message} {errors}")),
                None => ClientError::Validation(message),
            }
        }
        _ => match body {
            Some(b) => ClientError::Api {
                status: status.as_u16(),
                message: b.message,
                details: b.errors,
            },
            None => ClientError::Internal(format!("{status}: {text}")),
        },
    }
}

/// Debug span wrapping one request/response exchange
fn request_span(req: &reqwest::Request) -> tracing::Span {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    tracing::debug_span!("http", method = %req.method(), url = %req.url(), request_id)
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let request_id = uuid::Uuid::new_v4().to_string();
        let mut req = self
            .client
            .request(method, &url)
            .header(REQUEST_ID_HEADER, request_id);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send_raw(&self, req: RequestBuilder) -> ClientResult<Vec<u8>> {
        let req = req.build()?;
        let span = request_span(&req);
        async move {
            tracing::debug!("HTTP request");
            let response = self.client.execute(req).await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            tracing::debug!(%status, len = bytes.len(), "HTTP response");
            if !status.is_success() {
                return Err(error_from_status(status, &bytes));
            }
            Ok::<_, ClientError>(bytes.to_vec())
        }
        .instrument(span)
        .await
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let bytes = self.send_raw(req).await?;
        decode_body(&bytes)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn get_bytes(&self, path: &str) -> ClientResult<Vec<u8>> {
        self.send_raw(self.request(Method::GET, path)).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.request(Method::POST, path)).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.request(Method::PATCH, path).json(body)).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        self.send_raw(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client =
            NetworkHttpClient::new(&ClientConfig::new("http://pos.local:8000/")).unwrap();
        assert_eq!(client.base_url(), "http://pos.local:8000");
        assert_eq!(client.url("/api/productos"), "http://pos.local:8000/api/productos");
        assert_eq!(client.url("api/boletas/3"), "http://pos.local:8000/api/boletas/3");
    }

    #[test]
    fn test_request_span_fields() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let client =
                NetworkHttpClient::new(&ClientConfig::new("http://pos.local:8000")).unwrap();
            let req = client.request(Method::GET, "/api/productos").build().unwrap();
            assert!(req.headers().contains_key(REQUEST_ID_HEADER));

            let span = request_span(&req);
            let meta = span.metadata().expect("span enabled at debug level");
            assert_eq!(meta.name(), "http");
            assert_eq!(*meta.level(), tracing::Level::DEBUG);
            for field in ["method", "url", "request_id"] {
                assert!(meta.fields().field(field).is_some(), "missing {field}");
            }
        });
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let v: serde_json::Value = decode_body(b"").unwrap();
        assert!(v.is_null());
        let unit: () = decode_body(b"  \n").unwrap();
        assert_eq!(unit, ());
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            error_from_status(StatusCode::UNAUTHORIZED, b""),
            ClientError::Unauthorized
        ));
        match error_from_status(StatusCode::NOT_FOUND, br#"{"message":"Producto no existe"}"#) {
            ClientError::NotFound(m) => assert_eq!(m, "Producto no existe"),
            other => panic!("unexpected {other:?}"),
        }
        match error_from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"message":"Datos invalidos","errors":{"precio":["requerido"]}}"#,
        ) {
            ClientError::Validation(m) => {
                assert!(m.starts_with("Datos invalidos"));
                assert!(m.contains("precio"));
            }
            other => panic!("unexpected {other:?}"),
        }
        match error_from_status(StatusCode::CONFLICT, br#"{"error":"Stock insuficiente"}"#) {
            ClientError::Api { status, message, .. } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Stock insuficiente");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            error_from_status(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>"),
            ClientError::Internal(_)
        ));
    }
}
