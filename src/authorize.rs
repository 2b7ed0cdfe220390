use crate::credential::{Credential, Verification};
use crate::result::Decision;
use crate::store::{DeleteOutcome, RideStore};
use tracing::{debug, warn};

/// Deny diagnostic shared by the not-found and not-owner outcomes. Keeping
/// them indistinguishable stops a caller probing for other users' records.
pub const OWNER_ONLY_DELETE: &str = "users can only delete their own rides";

/// Authorizes a mutating operation by comparing the credential's subject
/// against the target record's owner.
///
/// The comparison happens inside a single conditional delete, never as a
/// read followed by a delete: ownership cannot change between the two steps
/// because there is only one step. One attempt, no retry — retrying could
/// mask a legitimate condition failure as transient.
pub struct OwnershipAuthorizer<'a> {
    store: &'a dyn RideStore,
    verification: &'a Verification,
}

impl<'a> OwnershipAuthorizer<'a> {
    pub fn new(store: &'a dyn RideStore, verification: &'a Verification) -> Self {
        Self {
            store,
            verification,
        }
    }

    pub fn delete(&self, authorization: Option<&str>, ride_id: &str) -> Decision {
        let credential = match Credential::from_authorization(authorization, self.verification) {
            Ok(credential) => credential,
            Err(err) => {
                // Caller error, not an ownership denial; the diagnostic says which.
                debug!("delete rejected: {err}");
                return Decision::deny(403).with_message(&err.to_string());
            }
        };

        match self
            .store
            .conditional_delete(ride_id, &credential.subject)
        {
            Ok(DeleteOutcome::Deleted) => Decision::allow(200),
            Ok(DeleteOutcome::ConditionFailed) => {
                debug!(ride_id, "delete condition failed");
                Decision::deny(403).with_message(OWNER_ONLY_DELETE)
            }
            Err(fault) => {
                warn!(ride_id, "delete fault: {fault}");
                Decision::deny(500).with_errors([fault.to_string()])
            }
        }
    }
}

#[cfg(test)]
#[path = "authorize_test.rs"]
mod authorize_test;
