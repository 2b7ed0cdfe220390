use crate::constants::policy;
use base64::{Engine as _, engine::general_purpose};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

pub type VerifierFn = dyn Fn(&str) -> Result<(), CredentialError> + Send + Sync;

/// Signature verification seam. The observed contract only decodes an
/// already-issued credential, so [`Verification::None`] is the default;
/// deployments that do hold key material hook in with
/// [`Verification::Custom`], which runs before any claim is read.
#[derive(Clone, Default)]
pub enum Verification {
    #[default]
    None,
    Custom(Arc<VerifierFn>),
}

impl Verification {
    pub fn custom<F>(verifier: F) -> Self
    where
        F: Fn(&str) -> Result<(), CredentialError> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(verifier))
    }

    fn run(&self, token: &str) -> Result<(), CredentialError> {
        match self {
            Verification::None => Ok(()),
            Verification::Custom(verifier) => verifier(token),
        }
    }
}

/// Caller-side credential failures. These are input errors, deliberately
/// distinct from an ownership denial: a malformed token must never read as
/// "not authorized".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("request carried no authorization header")]
    MissingAuthorization,
    #[error("authorization value does not decode to a credential")]
    MalformedToken,
    #[error("credential carries no subject claim")]
    MissingSubject,
    #[error("credential verification failed: {0}")]
    Rejected(String),
}

/// Decoded token payload. Only the `sub` claim is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub subject: String,
}

impl Credential {
    /// Decodes a raw `Authorization` value: the fixed-length scheme prefix
    /// is stripped, the remainder trimmed and parsed as
    /// `header.payload.signature`, and the payload's `sub` claim extracted.
    pub fn from_authorization(
        raw: Option<&str>,
        verification: &Verification,
    ) -> Result<Self, CredentialError> {
        let raw = raw.ok_or(CredentialError::MissingAuthorization)?;
        let token = raw
            .get(policy::BEARER_PREFIX_LEN..)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(CredentialError::MalformedToken)?;

        verification.run(token)?;

        let payload = token
            .split('.')
            .nth(1)
            .ok_or(CredentialError::MalformedToken)?;
        let payload_bytes = general_purpose::URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|err| {
                debug!("credential payload is not valid base64: {err:?}");
                CredentialError::MalformedToken
            })?;
        let claims: Value = serde_json::from_slice(&payload_bytes).map_err(|err| {
            debug!("credential payload is not valid JSON: {err:?}");
            CredentialError::MalformedToken
        })?;

        let subject = claims
            .get("sub")
            .and_then(Value::as_str)
            .ok_or(CredentialError::MissingSubject)?;

        Ok(Self {
            subject: subject.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;
