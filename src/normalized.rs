use crate::case::{normalize_lower, trim_lower};
use crate::request::RequestDescriptor;
use indexmap::IndexMap;

/// Canonical view of a request's headers: names lower-cased, values trimmed
/// and lower-cased. Built fresh per request and never mutated afterwards.
///
/// Two source names that normalize to the same key resolve last-write-wins
/// in source iteration order.
#[derive(Debug, Clone)]
pub struct NormalizedHeaders {
    entries: IndexMap<String, String>,
}

impl NormalizedHeaders {
    pub fn new(request: &RequestDescriptor) -> Self {
        Self::from_pairs(
            request
                .headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        )
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut entries = IndexMap::new();
        for (name, value) in pairs {
            entries.insert(normalize_lower(name), trim_lower(value));
        }
        Self { entries }
    }

    /// Case-insensitive lookup; the stored key is always lower-case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(normalize_lower(name).as_str())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(normalize_lower(name).as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "normalized_test.rs"]
mod normalized_test;
