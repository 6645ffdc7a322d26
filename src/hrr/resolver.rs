use crate::ids::{PartyId, TransactionId};
use crate::models::{ResolvedRoles, Role, TransactionRecord};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoleResolutionError {
    #[error("user {user} is not a party to this transaction ({transaction})")]
    NotAParty {
        transaction: TransactionId,
        user: PartyId,
    },

    #[error("transaction {transaction} has no distinct counter-party; cannot review self ({user})")]
    SelfReview {
        transaction: TransactionId,
        user: PartyId,
    },
}

impl RoleResolutionError {
    /// Copy to show the user. Internal role-mapping details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        return match self {
            Self::NotAParty { .. } => "You do not have permission to review this transaction",
            Self::SelfReview { .. } => "Something went wrong, please contact support",
        };
    }
}

/// Works out which role the current user plays in a transaction, and who they review.
///
/// Only the party ids decide the outcome; `post_type` and the `user_role` hint never do.
/// If the naive mapping points the reviewer at themselves the roles are inverted once, and a
/// collision that survives the inversion is reported as [`RoleResolutionError::SelfReview`].
pub fn resolve_roles(
    record: &TransactionRecord,
    current_user_id: &PartyId,
) -> Result<ResolvedRoles, RoleResolutionError> {
    let mut role = if current_user_id.matches(&record.client_id) {
        Role::Client
    } else if current_user_id.matches(&record.freelancer_id) {
        Role::Freelancer
    } else {
        return Err(RoleResolutionError::NotAParty {
            transaction: record.id,
            user: current_user_id.clone(),
        });
    };

    let mut reviewee = record.party(role.counterpart());

    if reviewee.id.matches(current_user_id) {
        log::warn!(
            "Transaction {} maps user {current_user_id} onto both sides, inverting roles",
            record.id
        );

        role = role.counterpart();
        reviewee = record.party(role.counterpart());

        if reviewee.id.matches(current_user_id) {
            return Err(RoleResolutionError::SelfReview {
                transaction: record.id,
                user: current_user_id.clone(),
            });
        }
    }

    if let Some(hint) = record.user_role {
        if hint != role {
            log::debug!(
                "Ignoring role hint {hint} on transaction {}, resolved as {role}",
                record.id
            );
        }
    }

    return Ok(ResolvedRoles {
        current_user_role: role,
        reviewee,
    });
}
