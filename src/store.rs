use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use thiserror::Error;

/// A shared ride record. `owner` is the subject that created it; the policy
/// engine never reads it directly, only through the conditional delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ride {
    pub id: String,
    pub owner: String,
    pub from: String,
    pub to: String,
    pub when: String,
}

/// Collaborator fault. Surfaced to the caller as a failure, never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("ride store fault: {0}")]
pub struct StoreError(pub String);

/// Scan response. `items` is `None` when the collaborator answered with
/// neither records nor a fault; the listing service must treat that as a
/// failure, never as an empty page.
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    pub items: Option<Vec<Ride>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The record is absent or its owner differs from the required one. The
    /// two causes are not reported separately.
    ConditionFailed,
}

/// Key-value storage contract for ride records.
///
/// `conditional_delete` performs the ownership comparison and the removal as
/// one atomic storage operation; callers never read first.
pub trait RideStore: Send + Sync {
    fn scan(&self, limit: usize) -> Result<ScanOutput, StoreError>;

    fn conditional_delete(
        &self,
        id: &str,
        required_owner: &str,
    ) -> Result<DeleteOutcome, StoreError>;
}

/// In-process store used by tests and demos. A single mutex makes the
/// conditional delete atomic.
#[derive(Debug, Default)]
pub struct MemoryRideStore {
    rides: Mutex<IndexMap<String, Ride>>,
}

impl MemoryRideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, ride: Ride) {
        let mut rides = self.rides.lock().unwrap_or_else(|err| err.into_inner());
        rides.insert(ride.id.clone(), ride);
    }

    pub fn len(&self) -> usize {
        let rides = self.rides.lock().unwrap_or_else(|err| err.into_inner());
        rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        let rides = self.rides.lock().unwrap_or_else(|err| err.into_inner());
        rides.contains_key(id)
    }
}

impl RideStore for MemoryRideStore {
    fn scan(&self, limit: usize) -> Result<ScanOutput, StoreError> {
        let rides = self.rides.lock().unwrap_or_else(|err| err.into_inner());
        let items = rides.values().take(limit).cloned().collect();
        Ok(ScanOutput { items: Some(items) })
    }

    fn conditional_delete(
        &self,
        id: &str,
        required_owner: &str,
    ) -> Result<DeleteOutcome, StoreError> {
        let mut rides = self.rides.lock().unwrap_or_else(|err| err.into_inner());
        let owned = rides
            .get(id)
            .is_some_and(|ride| ride.owner == required_owner);
        if owned {
            rides.shift_remove(id);
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::ConditionFailed)
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
