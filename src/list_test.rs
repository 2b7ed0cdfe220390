use super::*;
use crate::store::{DeleteOutcome, MemoryRideStore, Ride, StoreError};

struct FaultyStore;

impl RideStore for FaultyStore {
    fn scan(&self, _limit: usize) -> Result<ScanOutput, StoreError> {
        Err(StoreError("scan offline".into()))
    }

    fn conditional_delete(
        &self,
        _id: &str,
        _required_owner: &str,
    ) -> Result<DeleteOutcome, StoreError> {
        Err(StoreError("delete offline".into()))
    }
}

/// Answers with neither items nor a fault.
struct DegenerateStore;

impl RideStore for DegenerateStore {
    fn scan(&self, _limit: usize) -> Result<ScanOutput, StoreError> {
        Ok(ScanOutput { items: None })
    }

    fn conditional_delete(
        &self,
        _id: &str,
        _required_owner: &str,
    ) -> Result<DeleteOutcome, StoreError> {
        Ok(DeleteOutcome::ConditionFailed)
    }
}

mod list {
    use super::*;

    #[test]
    fn should_return_empty_success_given_store_holds_no_rides() {
        // Arrange
        let store = MemoryRideStore::new();

        // Act
        let decision = ListingService::new(&store).list();

        // Assert
        assert!(decision.allowed);
        assert_eq!(decision.status, 200);
        assert_eq!(decision.body.as_deref(), Some("[]"));
    }

    #[test]
    fn should_return_serialized_rides_given_store_holds_records() {
        // Arrange
        let store = MemoryRideStore::new();
        store.put(Ride {
            id: "r1".into(),
            owner: "u1".into(),
            from: "downtown".into(),
            to: "airport".into(),
            when: "2020-01-01T09:00".into(),
        });

        // Act
        let decision = ListingService::new(&store).list();

        // Assert
        assert!(decision.allowed);
        let body = decision.body.expect("listing should carry a body");
        let rides: Vec<Ride> = serde_json::from_str(&body).expect("body should be a ride array");
        assert_eq!(rides.len(), 1);
        assert_eq!(rides[0].id, "r1");
    }

    #[test]
    fn should_surface_fault_given_store_errors() {
        // Arrange
        let store = FaultyStore;

        // Act
        let decision = ListingService::new(&store).list();

        // Assert
        assert!(!decision.allowed);
        assert_eq!(decision.status, 500);
        assert!(
            decision
                .body
                .as_deref()
                .is_some_and(|body| body.contains("scan offline"))
        );
    }

    #[test]
    fn should_report_failure_given_scan_is_degenerate() {
        // Arrange: no items and no fault must never read as an empty page.
        let store = DegenerateStore;

        // Act
        let decision = ListingService::new(&store).list();

        // Assert
        assert!(!decision.allowed);
        assert_eq!(decision.status, 500);
        assert!(
            decision
                .body
                .as_deref()
                .is_some_and(|body| body.contains(SCAN_DEGENERATE))
        );
    }
}
