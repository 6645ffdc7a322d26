mod identity;
mod record_store;
mod review_service;

pub use identity::{IdentityError, IdentityProvider, SessionIdentity};
pub use record_store::{RecordStore, TransactionLookup};
pub use review_service::{ReviewService, ReviewServiceError};
