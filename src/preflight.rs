use crate::constants::{header, policy};
use crate::headers::HeaderCollection;
use crate::normalized::NormalizedHeaders;
use crate::policy::AllowListPolicy;
use crate::request::RequestDescriptor;
use crate::result::Decision;
use tracing::debug;

/// Deny diagnostic for a preflight that never presented the negotiation
/// headers. Distinguishable from [`CORS_NOT_ALLOWED`] even though both share
/// the 403 status.
pub const MISSING_CORS_HEADERS: &str = "missing CORS request header or headers";
/// Generic deny diagnostic for a preflight outside the allow-list.
pub const CORS_NOT_ALLOWED: &str = "CORS not allowed";

/// Evaluates CORS preflight negotiation against an [`AllowListPolicy`].
///
/// Two terminal states, no intermediate ones: `rejected` (403) or `accepted`
/// (200 with the request's origin, method, and header list reflected
/// verbatim). Pure function of its inputs and the immutable policy.
pub struct PreflightEvaluator<'a> {
    policy: &'a AllowListPolicy,
}

impl<'a> PreflightEvaluator<'a> {
    pub fn new(policy: &'a AllowListPolicy) -> Self {
        Self { policy }
    }

    pub fn evaluate(
        &self,
        request: &RequestDescriptor,
        normalized: &NormalizedHeaders,
    ) -> Decision {
        let origin = non_empty(normalized.get(header::ORIGIN));
        let requested_method = non_empty(normalized.get(header::ACCESS_CONTROL_REQUEST_METHOD));
        let requested_headers = non_empty(normalized.get(header::ACCESS_CONTROL_REQUEST_HEADERS));

        let (Some(origin), Some(requested_method), Some(requested_headers)) =
            (origin, requested_method, requested_headers)
        else {
            debug!("preflight rejected: negotiation header absent");
            return Decision::deny(403).with_message(MISSING_CORS_HEADERS);
        };

        if !self.policy.allows_origin(origin)
            || !self.policy.allows_method(requested_method)
            || !self.policy.allows_headers(requested_headers)
        {
            debug!(origin, requested_method, "preflight rejected by allow-list");
            return Decision::deny(403).with_message(CORS_NOT_ALLOWED);
        }

        let mut headers = HeaderCollection::new();
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            request
                .original_header(header::ACCESS_CONTROL_REQUEST_HEADERS)
                .unwrap_or(""),
        );
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            request
                .original_header(header::ACCESS_CONTROL_REQUEST_METHOD)
                .unwrap_or(""),
        );
        headers.push(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            request.original_header(header::ORIGIN).unwrap_or(""),
        );
        headers.push(
            header::ACCESS_CONTROL_MAX_AGE,
            policy::PREFLIGHT_MAX_AGE_SECS.to_string(),
        );

        Decision::allow(200).with_headers(headers.into_headers())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "preflight_test.rs"]
mod preflight_test;
