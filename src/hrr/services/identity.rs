use crate::ids::PartyId;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Current user id must be a positive integer, got: {0}")]
    InvalidUserId(PartyId),
}

/// Source of the authenticated caller's identity
pub trait IdentityProvider {
    fn current_user(&self) -> Result<PartyId>;
}

/// Identity fixed for the lifetime of a session
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    user_id: PartyId,
}

impl SessionIdentity {
    pub fn new(user_id: PartyId) -> Result<Self> {
        if !user_id.is_positive() {
            Err(IdentityError::InvalidUserId(user_id.clone()))?
        }

        return Ok(Self { user_id });
    }
}

impl IdentityProvider for SessionIdentity {
    fn current_user(&self) -> Result<PartyId> {
        return Ok(self.user_id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_ids() {
        let identity = SessionIdentity::new(PartyId::from("12")).unwrap();

        assert_eq!(identity.current_user().unwrap(), PartyId::from("12"));
    }

    #[test]
    fn rejects_other_ids() {
        for id in [PartyId::Number(0), PartyId::Number(-1), PartyId::from("guest")] {
            assert!(SessionIdentity::new(id).is_err());
        }
    }
}
