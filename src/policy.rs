use crate::case::{equals_ignore_case, trim_lower};
use crate::constants::policy;
use once_cell::sync::Lazy;

/// Fixed allow-list evaluated by the preflight evaluator and the origin
/// gate. Read-only after construction; the process-wide instance lives for
/// the process lifetime and needs no locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowListPolicy {
    origins: Vec<String>,
    methods: Vec<String>,
    headers: Vec<String>,
}

static DEFAULT_POLICY: Lazy<AllowListPolicy> = Lazy::new(|| {
    AllowListPolicy::new(
        policy::ALLOWED_ORIGINS,
        policy::ALLOWED_METHODS,
        policy::ALLOWED_HEADERS,
    )
});

impl AllowListPolicy {
    pub fn new<I, J, K, S, T, U>(origins: I, methods: J, headers: K) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        K: IntoIterator<Item = U>,
        S: Into<String>,
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            origins: origins.into_iter().map(Into::into).collect(),
            methods: methods
                .into_iter()
                .map(|value| trim_lower(&value.into()))
                .collect(),
            headers: headers
                .into_iter()
                .map(|value| trim_lower(&value.into()))
                .collect(),
        }
    }

    /// The process-wide policy built from the fixed constants.
    pub fn shared() -> &'static AllowListPolicy {
        &DEFAULT_POLICY
    }

    /// Exact, case-sensitive membership. Origins are URLs; their scheme and
    /// path components are case-sensitive.
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.origins.iter().any(|allowed| allowed == origin)
    }

    pub fn allows_method(&self, method: &str) -> bool {
        self.methods
            .iter()
            .any(|allowed| equals_ignore_case(allowed, method))
    }

    pub fn allows_header(&self, header: &str) -> bool {
        self.headers
            .iter()
            .any(|allowed| equals_ignore_case(allowed, header))
    }

    /// Accepts a comma-separated request-headers value. An empty list is
    /// trivially allowed.
    pub fn allows_headers(&self, requested: &str) -> bool {
        requested
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .all(|token| self.allows_header(token))
    }
}

impl Default for AllowListPolicy {
    fn default() -> Self {
        DEFAULT_POLICY.clone()
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
