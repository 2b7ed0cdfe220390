use crate::constants::policy;
use crate::result::Decision;
use crate::store::{RideStore, ScanOutput};
use tracing::warn;

/// Failure diagnostic for a scan that produced neither items nor a fault.
pub const SCAN_DEGENERATE: &str = "scan returned neither items nor an error";

/// Fetches one bounded page of rides. No cursor, no ordering promise beyond
/// whatever the store provides.
pub struct ListingService<'a> {
    store: &'a dyn RideStore,
}

impl<'a> ListingService<'a> {
    pub fn new(store: &'a dyn RideStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Decision {
        match self.store.scan(policy::LIST_PAGE_SIZE) {
            Ok(ScanOutput { items: Some(items) }) => match serde_json::to_string(&items) {
                Ok(body) => Decision::allow(200).with_body(body),
                Err(err) => Decision::deny(500).with_errors([err.to_string()]),
            },
            // An answer with no items and no fault must not pass for an
            // empty page; the collaborator is misbehaving.
            Ok(ScanOutput { items: None }) => {
                warn!("scan response carried neither items nor a fault");
                Decision::deny(500).with_errors([SCAN_DEGENERATE])
            }
            Err(fault) => {
                warn!("scan fault: {fault}");
                Decision::deny(500).with_errors([fault.to_string()])
            }
        }
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;
