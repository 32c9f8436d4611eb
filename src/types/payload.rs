use serde_json::{Map, Value};

use crate::types::FormData;
use crate::utils::IsEmpty;

/// Body of a POST request.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Form(FormData),
}

impl Payload {
    /// Flatten the payload into multipart fields for a file upload.
    ///
    /// Top-level object fields become text parts: strings verbatim, other
    /// values as their JSON text, `null` skipped. Any other JSON value is sent
    /// as a single `data` part.
    pub fn into_form(self) -> FormData {
        match self {
            Self::Form(form) => form,
            Self::Json(Value::Object(map)) => {
                map.into_iter()
                    .fold(FormData::new(), |form, (name, value)| match value {
                        Value::Null => form,
                        Value::String(s) => form.text(name, s),
                        other => form.text(name, other.to_string()),
                    })
            }
            Self::Json(Value::String(s)) => FormData::new().text("data", s),
            Self::Json(other) => FormData::new().text("data", other.to_string()),
        }
    }
}

impl IsEmpty for Payload {
    fn is_empty_arg(&self) -> bool {
        match self {
            Self::Json(value) => value.is_empty_arg(),
            Self::Form(form) => form.is_empty_arg(),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<&Value> for Payload {
    fn from(value: &Value) -> Self {
        Self::Json(value.clone())
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self::Json(Value::Object(map))
    }
}

impl From<FormData> for Payload {
    fn from(form: FormData) -> Self {
        Self::Form(form)
    }
}
