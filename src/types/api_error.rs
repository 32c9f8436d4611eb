use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error payload returned by the GoCardless API under the `error` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<u16>,
    pub request_id: Option<String>,
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    pub field: Option<String>,
    pub reason: Option<String>,
    pub request_pointer: Option<String>,
}

impl ApiError {
    /// Extract the error from a `{"error": {...}}` envelope.
    pub fn from_envelope(body: &Value) -> Option<Self> {
        let inner = body.get("error")?;
        serde_json::from_value(inner.clone()).ok()
    }
}
