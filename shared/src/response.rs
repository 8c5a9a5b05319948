//! API Response types
//!
//! The backend answers either with the bare value or wrapped:
//! ```json
//! { "success": true, "message": "OK", "data": { ... } }
//! ```

use serde::{Deserialize, Serialize};

/// Wrapped API response
///
/// `data` must be present (it may be `null`) so that a bare object is never
/// mistaken for an empty wrapper.
#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub data: Option<T>,
}

/// Either form of a successful response body
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped(ApiResponse<T>),
    Bare(T),
}

/// Why an envelope could not be opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// `success: false`, with the server's message
    Rejected(String),
    /// Wrapped response without `data`
    MissingData,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> Result<T, EnvelopeError> {
        match self {
            Envelope::Bare(value) => Ok(value),
            Envelope::Wrapped(resp) => {
                if resp.success == Some(false) {
                    return Err(EnvelopeError::Rejected(
                        resp.message.unwrap_or_else(|| "Unknown error".into()),
                    ));
                }
                resp.data.ok_or(EnvelopeError::MissingData)
            }
        }
    }
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(alias = "error")]
    pub message: String,
    /// Field-level validation messages
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}
