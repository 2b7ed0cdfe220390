use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::normalized::NormalizedHeaders;
use crate::policy::AllowListPolicy;
use crate::request::RequestDescriptor;
use crate::result::Decision;
use tracing::debug;

/// Deny diagnostic for a simple request whose origin is absent or unlisted.
pub const NOT_AN_ALLOWED_ORIGIN: &str = "not an allowed origin";

/// Headers to merge into the eventual success response once the gate passes.
#[derive(Debug, Clone)]
pub struct GatePass {
    pub(crate) headers: HeaderCollection,
}

/// Origin allow-list gate for simple (non-preflight) requests.
///
/// The `Origin` header name is matched case-insensitively; its value is
/// compared case-sensitively against the allow-list, since URLs are
/// case-sensitive in scheme and path.
pub struct OriginGate<'a> {
    policy: &'a AllowListPolicy,
}

impl<'a> OriginGate<'a> {
    pub fn new(policy: &'a AllowListPolicy) -> Self {
        Self { policy }
    }

    pub fn check(
        &self,
        request: &RequestDescriptor,
        normalized: &NormalizedHeaders,
    ) -> Result<GatePass, Decision> {
        if !normalized.contains(header::ORIGIN) {
            debug!("simple request rejected: no origin header");
            return Err(Decision::deny(403).with_message(NOT_AN_ALLOWED_ORIGIN));
        }

        let origin = request.original_header(header::ORIGIN).unwrap_or("").trim();
        if !self.policy.allows_origin(origin) {
            debug!(origin, "simple request rejected by origin allow-list");
            return Err(Decision::deny(403).with_message(NOT_AN_ALLOWED_ORIGIN));
        }

        let mut headers = HeaderCollection::new();
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        Ok(GatePass { headers })
    }
}

#[cfg(test)]
#[path = "origin_gate_test.rs"]
mod origin_gate_test;
