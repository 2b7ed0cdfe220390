use indexmap::IndexMap;

/// Response headers keyed by canonical name, in insertion order.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self {
            headers: Headers::new(),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_string(), value.into());
    }

    pub(crate) fn extend(&mut self, other: Headers) {
        for (name, value) in other {
            self.headers.insert(name, value);
        }
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
