use std::fmt;

use serde_json::Value;

use crate::types::FormData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// How the response body should be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseType {
    #[default]
    Json,
    Binary,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    None,
    Json(Value),
    Multipart(FormData),
}

/// One request, built by a verb method and handed to the executor.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub response_type: ResponseType,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: RequestBody::None,
            response_type: ResponseType::Json,
        }
    }

    pub fn query(mut self, params: &[(&str, &str)]) -> Self {
        self.query.extend(
            params
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        );
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, form: FormData) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    pub fn is_file(&self) -> bool {
        self.response_type == ResponseType::Binary
            || matches!(self.body, RequestBody::Multipart(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_defaults() {
        let req = RequestDescriptor::new(Method::Delete, "/mandates/MD1");
        assert_eq!(req.method, Method::Delete);
        assert_eq!(req.body, RequestBody::None);
        assert_eq!(req.response_type, ResponseType::Json);
        assert!(req.query.is_empty());
        assert!(!req.is_file());
    }

    #[test]
    fn test_descriptor_builder() {
        let req = RequestDescriptor::new(Method::Get, "/payments")
            .query(&[("limit", "10"), ("status", "paid_out")])
            .response_type(ResponseType::Binary);
        assert_eq!(
            req.query,
            vec![
                ("limit".to_string(), "10".to_string()),
                ("status".to_string(), "paid_out".to_string())
            ]
        );
        assert!(req.is_file());

        let req = RequestDescriptor::new(Method::Put, "/customers/CU1").json(json!({}));
        assert_eq!(req.body, RequestBody::Json(json!({})));
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(reqwest::Method::from(Method::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(Method::Delete), reqwest::Method::DELETE);
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
