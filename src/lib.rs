pub mod client;
pub mod config;
pub mod error;
pub mod rest;
pub mod types;
pub mod utils;

// ---- Top-level re-exports for ergonomic usage ----

// Client + config
pub use client::GoCardlessClient;
pub use config::{
    Environment, GoCardlessConfig, GOCARDLESS_API_URL, GOCARDLESS_API_VERSION,
    GOCARDLESS_SANDBOX_API_URL,
};
pub use error::{GoCardlessError, Result};

// REST transport
pub use rest::{GoCardlessHttpClient, Method, RequestBody, RequestDescriptor, ResponseType};

// Request / response types
pub use types::{
    ApiError, ApiErrorDetail, FormData, FormField, FormValue, Payload, RequestOptions,
    ResponseBody,
};

pub use utils::IsEmpty;
