pub mod request;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;

use crate::config::GOCARDLESS_API_VERSION;
use crate::error::{GoCardlessError, Result};
use crate::types::ResponseBody;
use crate::utils::join_url;

pub use request::{Method, RequestBody, RequestDescriptor, ResponseType};

const GOCARDLESS_VERSION_HEADER: &str = "gocardless-version";

/// HTTP transport for the GoCardless REST API.
///
/// Holds the base URL and the fixed headers; every request goes through
/// [`GoCardlessHttpClient::execute`].
#[derive(Debug, Clone)]
pub struct GoCardlessHttpClient {
    client: Client,
    base_url: String,
}

impl GoCardlessHttpClient {
    /// Build a transport with the authorization, version and content-type
    /// headers installed as defaults.
    ///
    /// # Errors
    ///
    /// Returns `GoCardlessError::Configuration` if the token cannot be sent as
    /// a header value or the underlying client cannot be built.
    pub fn new(base_url: &str, access_token: &str) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers(access_token)?)
            .build()
            .map_err(|e| {
                GoCardlessError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Perform one request and return the response body.
    ///
    /// Non-success statuses become `GoCardlessError::Request` with the body
    /// kept for diagnostics. Failures before a response arrives are returned
    /// as `GoCardlessError::Network` with the transport error untouched.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<ResponseBody> {
        let url = join_url(&self.base_url, &request.url);
        let method = request.method;
        debug!(%method, %url, is_file = request.is_file(), "sending request");

        let mut builder = self.client.request(method.into(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = match request.body {
            RequestBody::None => builder,
            RequestBody::Json(body) => builder.json(&body),
            RequestBody::Multipart(form) => builder.multipart(form.into_multipart()?),
        };

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        debug!(%method, %url, status, "response received");

        if !resp.status().is_success() {
            let body = match resp.bytes().await {
                Ok(bytes) if !bytes.is_empty() => {
                    ResponseBody::from_json_bytes(&bytes).into_json()
                }
                _ => None,
            };
            return Err(GoCardlessError::Request { status, body });
        }

        let bytes = resp.bytes().await?;
        Ok(match request.response_type {
            ResponseType::Json => ResponseBody::from_json_bytes(&bytes),
            ResponseType::Binary => ResponseBody::Binary(bytes.to_vec()),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn default_headers(access_token: &str) -> Result<HeaderMap> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {access_token}"))
        .map_err(|_| GoCardlessError::Configuration("Invalid accessToken".to_string()))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(
        HeaderName::from_static(GOCARDLESS_VERSION_HEADER),
        HeaderValue::from_static(GOCARDLESS_API_VERSION),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers() {
        let headers = default_headers("sandbox_token").unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer sandbox_token");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers["gocardless-version"], "2015-07-06");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let err = default_headers("live_abc\ndef").unwrap_err();
        assert!(matches!(err, GoCardlessError::Configuration(_)));
    }

    #[test]
    fn test_debug_hides_token() {
        let client =
            GoCardlessHttpClient::new("https://api.gocardless.com/", "live_topsecret").unwrap();
        assert!(!format!("{client:?}").contains("topsecret"));
        assert_eq!(client.base_url(), "https://api.gocardless.com/");
    }
}
