use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// Body of a successful response, exactly as the server sent it.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Binary(Vec<u8>),
}

impl ResponseBody {
    /// Decode a JSON-hinted body. An empty body becomes `null`; a body that is
    /// not JSON is kept as a JSON string.
    pub fn from_json_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::Json(Value::Null);
        }
        match serde_json::from_slice(bytes) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Json(Value::String(String::from_utf8_lossy(bytes).into_owned())),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Binary(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(bytes) => Some(bytes.as_slice()),
            Self::Json(_) => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Binary(_) => None,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Binary(bytes) => bytes,
            Self::Json(Value::String(text)) => text.into_bytes(),
            Self::Json(value) => value.to_string().into_bytes(),
        }
    }

    /// Deserialize the body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns `GoCardlessError::Decode` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Self::Json(value) => Ok(serde_json::from_value(value)?),
            Self::Binary(bytes) => Ok(serde_json::from_slice(&bytes)?),
        }
    }
}
