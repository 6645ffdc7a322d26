use super::{Role, ResolvedRoles, TransactionRecord};

use crate::ids::{PartyId, TransactionId};

use serde::{Deserialize, Serialize};

/// One output row: how a single transaction looks from the current user's side
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RoleReport {
    pub transaction: TransactionId,
    pub listing: String,
    pub your_role: Role,
    pub reviewee_id: PartyId,
    pub reviewee_name: String,
    pub reviewee_role: Role,
}

impl RoleReport {
    pub fn new(record: &TransactionRecord, resolved: ResolvedRoles) -> Self {
        return Self {
            transaction: record.id,
            listing: record.post_type.label().to_string(),
            your_role: resolved.current_user_role,
            reviewee_id: resolved.reviewee.id,
            reviewee_name: resolved.reviewee.name,
            reviewee_role: resolved.reviewee.role,
        };
    }
}
