use super::Role;

use crate::ids::PartyId;

use serde::Serialize;

/// One side of a transaction
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    pub role: Role,
}

/// Outcome of resolving a transaction for the current user. Computed fresh on every call.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoles {
    pub current_user_role: Role,
    pub reviewee: Party,
}
