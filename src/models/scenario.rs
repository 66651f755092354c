//! Scenario definitions
//!
//! The six scenarios are data: each one maps to a [`ScenarioPlan`] that the
//! runner executes step by step.

use std::fmt;

use crate::http::{HttpRequest, QueryParameters};

const JSON_CONTENT_TYPE: &str = "application/json";

/// All scenarios, in execution order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scenario {
    GetRequest,
    PostRequest,
    PutRequest,
    DeleteRequest,
    GetWithParameters,
    UnsupportedMethod,
}

impl Scenario {
    /// Get scenario number (1-6)
    pub fn number(&self) -> u8 {
        match self {
            Scenario::GetRequest => 1,
            Scenario::PostRequest => 2,
            Scenario::PutRequest => 3,
            Scenario::DeleteRequest => 4,
            Scenario::GetWithParameters => 5,
            Scenario::UnsupportedMethod => 6,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::GetRequest => "GET request",
            Scenario::PostRequest => "POST request",
            Scenario::PutRequest => "PUT request",
            Scenario::DeleteRequest => "DELETE request",
            Scenario::GetWithParameters => "GET with different parameters",
            Scenario::UnsupportedMethod => "Unsupported method",
        }
    }

    /// HTTP methods the scenario issues
    pub fn methods(&self) -> &'static str {
        match self {
            Scenario::GetRequest | Scenario::GetWithParameters => "GET",
            Scenario::PostRequest => "POST",
            Scenario::PutRequest => "PUT",
            Scenario::DeleteRequest => "DELETE",
            Scenario::UnsupportedMethod => "PATCH",
        }
    }

    pub fn all() -> Vec<Scenario> {
        vec![
            Scenario::GetRequest,
            Scenario::PostRequest,
            Scenario::PutRequest,
            Scenario::DeleteRequest,
            Scenario::GetWithParameters,
            Scenario::UnsupportedMethod,
        ]
    }

    pub fn from_number(n: u8) -> Option<Scenario> {
        Scenario::all().into_iter().find(|s| s.number() == n)
    }

    /// Requests and reporting rules for this scenario
    pub fn plan(&self) -> ScenarioPlan {
        match self {
            Scenario::GetRequest => ScenarioPlan {
                steps: vec![RequestStep::new("GET", "").query(QuerySource::Raw("name=TestUser"))],
                failure: FailureReport::default().status_code(),
                announce_success: true,
            },
            Scenario::PostRequest => ScenarioPlan {
                steps: vec![RequestStep::new("POST", "")
                    .json(r#"{"name":"Test", "value":123}"#)
                    .echo_body()],
                failure: FailureReport::default().status_code().error_body(),
                announce_success: true,
            },
            Scenario::PutRequest => ScenarioPlan {
                steps: vec![RequestStep::new("PUT", "")
                    .json(r#"{"id":456, "name":"UpdatedItem"}"#)
                    .echo_body()],
                failure: FailureReport::default().status_code(),
                announce_success: true,
            },
            Scenario::DeleteRequest => ScenarioPlan {
                steps: vec![RequestStep::new("DELETE", "resource/123").body("")],
                failure: FailureReport::default()
                    .status_code()
                    .status_description(),
                announce_success: true,
            },
            Scenario::GetWithParameters => ScenarioPlan {
                steps: vec![
                    RequestStep::new("GET", "").label("1. GET without parameters:"),
                    RequestStep::new("GET", "")
                        .label("2. GET with parameter name=Alice:")
                        .query(QuerySource::Raw("name=Alice&age=30")),
                    RequestStep::new("GET", "")
                        .label("3. GET with several parameters:")
                        .query(QuerySource::Encoded(
                            QueryParameters::new()
                                .with("name", "Bob")
                                .with("city", "Moscow")
                                .with("lang", "ru"),
                        )),
                ],
                failure: FailureReport::default(),
                announce_success: false,
            },
            Scenario::UnsupportedMethod => ScenarioPlan {
                steps: vec![RequestStep::new("PATCH", "").json(r#"{"test":"data"}"#)],
                failure: FailureReport::default()
                    .error_label("Expected error")
                    .expect_status(405),
                announce_success: false,
            },
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Test {}: {}", self.number(), self.name())
    }
}

/// Steps plus reporting rules for one scenario
#[derive(Clone, Debug)]
pub struct ScenarioPlan {
    pub steps: Vec<RequestStep>,
    pub failure: FailureReport,
    /// Print `Status: SUCCESS` after each successful response
    pub announce_success: bool,
}

/// Where a step's query string comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuerySource {
    None,
    Raw(&'static str),
    Encoded(QueryParameters),
}

impl QuerySource {
    fn render(&self) -> Option<String> {
        match self {
            QuerySource::None => None,
            QuerySource::Raw(q) => Some((*q).to_string()),
            QuerySource::Encoded(params) => Some(params.to_query_string()),
        }
    }
}

/// A single request within a scenario
#[derive(Clone, Debug)]
pub struct RequestStep {
    /// Printed instead of the `Sending ...` line when set
    pub label: Option<&'static str>,
    pub method: &'static str,
    pub path: &'static str,
    pub query: QuerySource,
    pub content_type: Option<&'static str>,
    pub body: Option<&'static str>,
    /// Print the outgoing body before sending
    pub echo_body: bool,
}

impl RequestStep {
    pub fn new(method: &'static str, path: &'static str) -> Self {
        Self {
            label: None,
            method,
            path,
            query: QuerySource::None,
            content_type: None,
            body: None,
            echo_body: false,
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn query(mut self, query: QuerySource) -> Self {
        self.query = query;
        self
    }

    pub fn body(mut self, body: &'static str) -> Self {
        self.body = Some(body);
        self
    }

    pub fn json(mut self, body: &'static str) -> Self {
        self.content_type = Some(JSON_CONTENT_TYPE);
        self.body = Some(body);
        self
    }

    pub fn echo_body(mut self) -> Self {
        self.echo_body = true;
        self
    }

    /// Target relative to the base URL, e.g. `?name=TestUser`
    pub fn target(&self) -> String {
        match self.query.render() {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.to_string(),
        }
    }

    pub fn to_request(&self) -> HttpRequest {
        let mut request = HttpRequest::new(self.method, self.target());
        if let Some(content_type) = self.content_type {
            request = request.header("Content-Type", content_type);
        }
        if let Some(body) = self.body {
            request = request.body(body);
        }
        request
    }
}

/// What gets printed when a step fails
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureReport {
    pub error_label: &'static str,
    pub status_code: bool,
    pub error_body: bool,
    pub status_description: bool,
    /// Status that counts as the correct rejection
    pub expected_status: Option<u16>,
}

impl Default for FailureReport {
    fn default() -> Self {
        Self {
            error_label: "Error",
            status_code: false,
            error_body: false,
            status_description: false,
            expected_status: None,
        }
    }
}

impl FailureReport {
    pub fn error_label(mut self, label: &'static str) -> Self {
        self.error_label = label;
        self
    }

    pub fn status_code(mut self) -> Self {
        self.status_code = true;
        self
    }

    pub fn error_body(mut self) -> Self {
        self.error_body = true;
        self
    }

    pub fn status_description(mut self) -> Self {
        self.status_description = true;
        self
    }

    pub fn expect_status(mut self, status: u16) -> Self {
        self.status_code = true;
        self.expected_status = Some(status);
        self
    }
}
