//! HTTP client for probing the server under test
//!
//! Wraps reqwest and turns every exchange into an explicit
//! `Result<HttpResponse, HttpError>`: non-2xx responses are errors that
//! still carry the status code, reason and body the server sent.

use anyhow::{Context, Result};
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Method, StatusCode};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Default request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 100;

/// HTTP client errors
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Unable to connect to the remote server at {0}")]
    ConnectionRefused(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("The remote server returned an error: ({}) {}", .code, .reason.as_deref().unwrap_or("Unknown"))]
    Status {
        code: u16,
        reason: Option<String>,
        body: String,
    },
}

impl HttpError {
    /// Status code, when the server produced a response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            HttpError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Reason phrase of the error response
    pub fn reason(&self) -> Option<&str> {
        match self {
            HttpError::Status { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }

    /// Body of the error response
    pub fn body(&self) -> Option<&str> {
        match self {
            HttpError::Status { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Errors raised before any request left the process.
    ///
    /// These are not a property of the server and are not reported as a
    /// scenario failure.
    pub fn is_fatal(&self) -> bool {
        matches!(self, HttpError::InvalidUrl(_) | HttpError::InvalidMethod(_))
    }

    fn from_reqwest(e: reqwest::Error, url: &str, timeout_secs: u64) -> Self {
        if e.is_builder() {
            HttpError::InvalidUrl(url.to_string())
        } else if e.is_timeout() {
            HttpError::Timeout(timeout_secs)
        } else if e.is_connect() {
            HttpError::ConnectionRefused(url.to_string())
        } else {
            HttpError::RequestFailed(e.to_string())
        }
    }
}

/// HTTP client scoped to a single scenario
pub struct HttpClient {
    client: Client,
    base_url: Option<String>,
    timeout_secs: u64,
}

impl HttpClient {
    /// Create client with custom timeout
    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: None,
            timeout_secs,
        })
    }

    /// Set base URL for requests
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Build full URL.
    ///
    /// Relative targets are appended to the base URL as-is, so
    /// `http://host/` + `?a=1` gives `http://host/?a=1`.
    pub fn build_url(&self, target: &str) -> String {
        match &self.base_url {
            Some(base) if !target.starts_with("http://") && !target.starts_with("https://") => {
                format!("{base}{target}")
            }
            _ => target.to_string(),
        }
    }

    /// Send HTTP request
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self.build_url(&request.url);
        debug!("Sending {} request to {}", request.method, url);

        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| HttpError::InvalidMethod(request.method.clone()))?;

        let mut req_builder = self.client.request(method, &url);

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let start = Instant::now();

        let response = req_builder
            .send()
            .await
            .map_err(|e| HttpError::from_reqwest(e, &url, self.timeout_secs))?;

        let status = response.status();
        // hyper only records the phrase when it differs from the canonical one
        let reason = response
            .extensions()
            .get::<ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned())
            .or_else(|| status.canonical_reason().map(str::to_string));

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::from_reqwest(e, &url, self.timeout_secs))?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        let duration_ms = start.elapsed().as_millis() as u64;

        debug!(
            "Response: {} {} in {}ms",
            status.as_u16(),
            reason.as_deref().unwrap_or(""),
            duration_ms
        );

        if !status.is_success() {
            return Err(HttpError::Status {
                code: status.as_u16(),
                reason,
                body,
            });
        }

        Ok(HttpResponse {
            status_code: status.as_u16(),
            headers,
            body,
            duration_ms,
        })
    }
}

/// HTTP request builder
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Successful (2xx) HTTP response
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub duration_ms: u64,
}

impl HttpResponse {
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type").map(String::as_str)
    }
}

/// Human-readable status, e.g. `405 Method Not Allowed`
pub struct StatusLine(pub u16);

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match StatusCode::from_u16(self.0)
            .ok()
            .and_then(|s| s.canonical_reason())
        {
            Some(reason) => write!(f, "{} {reason}", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
