use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::config::{Environment, GoCardlessConfig};
use crate::error::{GoCardlessError, Result};
use crate::rest::{GoCardlessHttpClient, Method, RequestDescriptor, ResponseType};
use crate::types::{Payload, RequestOptions, ResponseBody};
use crate::utils::{is_absolute_url, IsEmpty};

/// Authenticated GoCardless API client.
///
/// Immutable after construction and cheap to clone; clones share the
/// underlying connection pool, so one client can serve any number of
/// concurrent calls.
#[derive(Clone)]
pub struct GoCardlessClient {
    environment: Environment,
    http_client: GoCardlessHttpClient,
}

impl GoCardlessClient {
    /// Create a client for `access_token`, choosing the sandbox endpoint for
    /// `sandbox_` tokens and production otherwise. No network calls are made.
    ///
    /// # Errors
    ///
    /// Returns `GoCardlessError::Configuration` if the token is empty.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::from_config(GoCardlessConfig::new(access_token))
    }

    /// Create a client from an explicit configuration. The base URL must be
    /// absolute with a host.
    pub fn from_config(config: GoCardlessConfig) -> Result<Self> {
        if config.access_token.is_empty_arg() {
            return Err(GoCardlessError::Configuration(
                "Missing accessToken".to_string(),
            ));
        }

        if !is_absolute_url(config.effective_base_url()) {
            return Err(GoCardlessError::Configuration("Invalid base url".to_string()));
        }

        let environment = config.environment();
        let http_client =
            GoCardlessHttpClient::new(config.effective_base_url(), &config.access_token)?;

        Ok(Self {
            environment,
            http_client,
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Base URL every relative path is resolved against.
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// GET `url` with `params` as the query string.
    ///
    /// With `options.is_file` the body comes back as raw bytes.
    pub async fn get(
        &self,
        url: &str,
        params: &[(&str, &str)],
        options: RequestOptions,
    ) -> Result<ResponseBody> {
        require_url(url)?;

        let response_type = if options.is_file {
            ResponseType::Binary
        } else {
            ResponseType::Json
        };
        let request = RequestDescriptor::new(Method::Get, url)
            .query(params)
            .response_type(response_type);
        self.http_client.execute(request).await
    }

    /// POST `data` to `url`.
    ///
    /// JSON payloads are sent as JSON unless `options.is_file` is set, in
    /// which case they are flattened into a multipart form. `FormData`
    /// payloads are always sent as multipart.
    pub async fn post(
        &self,
        url: &str,
        data: impl Into<Payload>,
        options: RequestOptions,
    ) -> Result<ResponseBody> {
        require_url(url)?;

        let data = data.into();
        if data.is_empty_arg() {
            debug!(url, "rejecting POST with empty body");
            return Err(GoCardlessError::MissingBody);
        }

        let request = RequestDescriptor::new(Method::Post, url);
        let request = match data {
            Payload::Json(body) if !options.is_file => request.json(body),
            payload => request.multipart(payload.into_form()),
        };
        self.http_client.execute(request).await
    }

    /// PUT `data` to `url` as JSON; `None` and `null` send `{}`.
    pub async fn put(&self, url: &str, data: Option<Value>) -> Result<ResponseBody> {
        require_url(url)?;

        let body = match data {
            None | Some(Value::Null) => Value::Object(Default::default()),
            Some(body) => body,
        };
        let request = RequestDescriptor::new(Method::Put, url).json(body);
        self.http_client.execute(request).await
    }

    /// DELETE `url`.
    pub async fn del(&self, url: &str) -> Result<ResponseBody> {
        require_url(url)?;

        let request = RequestDescriptor::new(Method::Delete, url);
        self.http_client.execute(request).await
    }
}

impl fmt::Debug for GoCardlessClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoCardlessClient")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url())
            .finish()
    }
}

fn require_url(url: &str) -> Result<()> {
    if url.is_empty_arg() {
        debug!("rejecting request with empty url");
        return Err(GoCardlessError::MissingUrl);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GOCARDLESS_API_URL, GOCARDLESS_SANDBOX_API_URL};

    #[test]
    fn test_missing_token_fails_synchronously() {
        let err = GoCardlessClient::new("").unwrap_err();
        assert!(matches!(err, GoCardlessError::Configuration(_)));
        assert_eq!(err.to_string(), "Missing accessToken");
    }

    #[test]
    fn test_sandbox_token_selects_sandbox_url() {
        let client = GoCardlessClient::new("sandbox_abc").unwrap();
        assert_eq!(client.environment(), Environment::Sandbox);
        assert_eq!(client.base_url(), GOCARDLESS_SANDBOX_API_URL);
    }

    #[test]
    fn test_live_token_selects_production_url() {
        for token in ["live_abc", "Sandbox_abc", "x_sandbox_abc"] {
            let client = GoCardlessClient::new(token).unwrap();
            assert_eq!(client.environment(), Environment::Live);
            assert_eq!(client.base_url(), GOCARDLESS_API_URL);
        }
    }

    #[test]
    fn test_invalid_base_url_fails_at_construction() {
        for base_url in ["not a url", "/relative/path", "mailto:ops@example.com", ""] {
            let config = GoCardlessConfig::new("sandbox_x").with_base_url(base_url);
            let err = GoCardlessClient::from_config(config).unwrap_err();
            assert!(
                matches!(err, GoCardlessError::Configuration(ref msg) if msg == "Invalid base url"),
                "base url {base_url:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_base_url_override_is_used() {
        let config = GoCardlessConfig::new("live_x").with_base_url("http://127.0.0.1:8080");
        let client = GoCardlessClient::from_config(config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
        assert_eq!(client.environment(), Environment::Live);
    }

    #[test]
    fn test_debug_omits_token() {
        let client = GoCardlessClient::new("sandbox_verysecret").unwrap();
        let out = format!("{client:?}");
        assert!(!out.contains("verysecret"));
        assert!(out.contains("Sandbox"));
    }
}
