use std::fmt;

/// Production API endpoint.
pub const GOCARDLESS_API_URL: &str = "https://api.gocardless.com/";
/// Sandbox API endpoint, selected for `sandbox_` tokens.
pub const GOCARDLESS_SANDBOX_API_URL: &str = "https://api-sandbox.gocardless.com/";
/// Pinned `GoCardless-Version` header value.
pub const GOCARDLESS_API_VERSION: &str = "2015-07-06";

const SANDBOX_TOKEN_PREFIX: &str = "sandbox_";

/// Which GoCardless environment a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Live,
    Sandbox,
}

impl Environment {
    /// Classify a token by its prefix. Case-sensitive, anchored at the start.
    pub fn from_access_token(access_token: &str) -> Self {
        if access_token.starts_with(SANDBOX_TOKEN_PREFIX) {
            Self::Sandbox
        } else {
            Self::Live
        }
    }

    pub fn base_url(self) -> &'static str {
        match self {
            Self::Live => GOCARDLESS_API_URL,
            Self::Sandbox => GOCARDLESS_SANDBOX_API_URL,
        }
    }
}

/// Configuration for the GoCardless client.
#[derive(Clone)]
pub struct GoCardlessConfig {
    /// Bearer access token. Must be non-empty.
    pub access_token: String,
    /// Base URL override (proxy, mock server); defaults to the token's
    /// environment endpoint if not set.
    pub base_url: Option<String>,
}

impl GoCardlessConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn environment(&self) -> Environment {
        Environment::from_access_token(&self.access_token)
    }

    /// The base URL requests will be resolved against.
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment().base_url())
    }
}

impl fmt::Debug for GoCardlessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoCardlessConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
