pub mod constants;

mod authorize;
mod case;
mod credential;
mod gateway;
mod headers;
mod list;
mod normalized;
mod origin_gate;
mod policy;
mod preflight;
mod request;
mod result;
mod store;

pub use authorize::{OWNER_ONLY_DELETE, OwnershipAuthorizer};
pub use credential::{Credential, CredentialError, Verification, VerifierFn};
pub use gateway::{Gateway, MISSING_RIDE_ID, NO_HANDLER_FOR_METHOD};
pub use headers::Headers;
pub use list::{ListingService, SCAN_DEGENERATE};
pub use normalized::NormalizedHeaders;
pub use origin_gate::{GatePass, NOT_AN_ALLOWED_ORIGIN, OriginGate};
pub use policy::AllowListPolicy;
pub use preflight::{CORS_NOT_ALLOWED, MISSING_CORS_HEADERS, PreflightEvaluator};
pub use request::RequestDescriptor;
pub use result::Decision;
pub use store::{DeleteOutcome, MemoryRideStore, Ride, RideStore, ScanOutput, StoreError};
