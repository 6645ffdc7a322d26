pub mod ids;
pub mod input;
pub mod models;
pub mod resolver;
mod result;
pub mod services;

pub use ids::{PartyId, TransactionId};
pub use models::{Party, PostType, ResolvedRoles, Role, RoleReport, TransactionRecord};
pub use resolver::{resolve_roles, RoleResolutionError};
pub use result::Result;

pub fn build_review_service(
    store: services::RecordStore,
    identity: services::SessionIdentity,
) -> services::ReviewService<services::RecordStore, services::SessionIdentity> {
    return services::ReviewService::new(store, identity);
}
