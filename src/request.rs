use crate::case::equals_ignore_case;

/// Normalized-transport request descriptor handed in by the gateway's caller.
///
/// Header names may arrive in any case and values may carry stray whitespace;
/// nothing here is canonicalized. Callers must not rely on header order —
/// upstream transports do not guarantee one.
#[derive(Debug, Clone, Default)]
pub struct RequestDescriptor {
    pub method: String,
    pub ride_id: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ride_id: None,
            headers: Vec::new(),
        }
    }

    /// Verbatim value of the first header whose name matches
    /// case-insensitively, untouched by normalization.
    pub fn original_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| equals_ignore_case(key, name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
