use super::{Party, PostType, Role};

use crate::ids::{PartyId, TransactionId};

/// Canonical shape of a transaction or application, after boundary normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub id: TransactionId,
    pub post_type: PostType,
    pub client_id: PartyId,
    pub client_name: String,
    pub freelancer_id: PartyId,
    pub freelancer_name: String,
    /// Role the backend already computed for the caller. Not authoritative.
    pub user_role: Option<Role>,
}

impl TransactionRecord {
    pub fn party(&self, role: Role) -> Party {
        return match role {
            Role::Client => Party {
                id: self.client_id.clone(),
                name: self.client_name.clone(),
                role,
            },
            Role::Freelancer => Party {
                id: self.freelancer_id.clone(),
                name: self.freelancer_name.clone(),
                role,
            },
        };
    }
}
