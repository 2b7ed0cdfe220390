use crate::authorize::OwnershipAuthorizer;
use crate::constants::{header, method};
use crate::credential::Verification;
use crate::list::ListingService;
use crate::normalized::NormalizedHeaders;
use crate::origin_gate::{GatePass, OriginGate};
use crate::policy::AllowListPolicy;
use crate::preflight::PreflightEvaluator;
use crate::request::RequestDescriptor;
use crate::result::Decision;
use tracing::debug;

/// Caller-error diagnostic for a delete without a target ride id.
pub const MISSING_RIDE_ID: &str = "missing ride id";
/// Deny diagnostic for a verb no handler is registered for.
pub const NO_HANDLER_FOR_METHOD: &str = "no handler registered for method";

/// Stateless dispatcher over the policy units. Built once at process start
/// with an explicitly injected store capability; each `handle` call is
/// purely sequential, with the storage round trip as its only outbound call.
pub struct Gateway<S> {
    policy: AllowListPolicy,
    store: S,
    verification: Verification,
}

impl<S> Gateway<S>
where
    S: crate::store::RideStore,
{
    pub fn new(store: S) -> Self {
        Self {
            policy: AllowListPolicy::default(),
            store,
            verification: Verification::default(),
        }
    }

    pub fn with_policy(mut self, policy: AllowListPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_verification(mut self, verification: Verification) -> Self {
        self.verification = verification;
        self
    }

    pub fn handle(&self, request: &RequestDescriptor) -> Decision {
        let normalized = NormalizedHeaders::new(request);

        if request.method.eq_ignore_ascii_case(method::OPTIONS) {
            return PreflightEvaluator::new(&self.policy).evaluate(request, &normalized);
        }

        let pass = match OriginGate::new(&self.policy).check(request, &normalized) {
            Ok(pass) => pass,
            Err(decision) => return decision,
        };

        if request.method.eq_ignore_ascii_case(method::GET) {
            let decision = ListingService::new(&self.store).list();
            return Self::attach_gate_headers(pass, decision);
        }

        if request.method.eq_ignore_ascii_case(method::DELETE) {
            let Some(ride_id) = request.ride_id.as_deref() else {
                debug!("delete rejected: no ride id in path");
                return Decision::deny(403).with_message(MISSING_RIDE_ID);
            };
            let decision = OwnershipAuthorizer::new(&self.store, &self.verification)
                .delete(request.original_header(header::AUTHORIZATION), ride_id);
            return Self::attach_gate_headers(pass, decision);
        }

        debug!(method = %request.method, "no handler for method");
        Decision::deny(403).with_message(NO_HANDLER_FOR_METHOD)
    }

    /// Gate headers belong on the eventual success response only.
    fn attach_gate_headers(pass: GatePass, mut decision: Decision) -> Decision {
        if decision.allowed {
            let mut headers = pass.headers;
            headers.extend(std::mem::take(&mut decision.headers));
            decision.headers = headers.into_headers();
        }
        decision
    }
}

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;
