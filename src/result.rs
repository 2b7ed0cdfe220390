use crate::headers::Headers;
use serde_json::json;

/// Fully-formed outcome of a policy unit or handler. Every unit returns a
/// complete Decision; nothing unwinds across component boundaries and the
/// transport layer serializes whatever it receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,
    pub status: u16,
    pub headers: Headers,
    pub body: Option<String>,
}

impl Decision {
    pub fn allow(status: u16) -> Self {
        Self {
            allowed: true,
            status,
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn deny(status: u16) -> Self {
        Self {
            allowed: false,
            status,
            headers: Headers::new(),
            body: None,
        }
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// `{"message": ...}` diagnostic body.
    pub fn with_message(self, message: &str) -> Self {
        let body = json!({ "message": message }).to_string();
        self.with_body(body)
    }

    /// `{"errors": [...]}` fault body.
    pub fn with_errors<I, S>(self, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let errors: Vec<String> = errors.into_iter().map(Into::into).collect();
        let body = json!({ "errors": errors }).to_string();
        self.with_body(body)
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
