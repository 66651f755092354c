//! HTTP client module
//!
//! Provides the request/response types and query string encoding used by
//! the scenarios.

mod client;
mod query;

pub use client::{HttpClient, HttpError, HttpRequest, StatusLine, DEFAULT_TIMEOUT_SECS};
pub use query::QueryParameters;
