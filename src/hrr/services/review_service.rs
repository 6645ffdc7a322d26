use super::{IdentityProvider, TransactionLookup};

use crate::ids::TransactionId;
use crate::models::{ResolvedRoles, RoleReport, TransactionRecord};
use crate::resolver::resolve_roles;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewServiceError {
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),
}

/// Answers "what role am I playing, and who do I review?" for stored transactions
pub struct ReviewService<L, I> {
    lookup: L,
    identity: I,
}

impl<L: TransactionLookup, I: IdentityProvider> ReviewService<L, I> {
    pub fn new(lookup: L, identity: I) -> Self {
        return Self { lookup, identity };
    }

    pub fn resolve(&self, id: &TransactionId) -> Result<ResolvedRoles> {
        let record = self.find_record(id)?;

        return self.resolve_record(record);
    }

    pub fn report(&self, id: &TransactionId) -> Result<RoleReport> {
        let record = self.find_record(id)?;
        let resolved = self.resolve_record(record)?;

        return Ok(RoleReport::new(record, resolved));
    }

    fn resolve_record(&self, record: &TransactionRecord) -> Result<ResolvedRoles> {
        let current_user = self.identity.current_user()?;
        let resolved = resolve_roles(record, &current_user)?;

        log::debug!("Resolved transaction {}: {resolved:?}", record.id);

        return Ok(resolved);
    }

    fn find_record(&self, id: &TransactionId) -> Result<&TransactionRecord> {
        let record = self
            .lookup
            .find(id)
            .ok_or(ReviewServiceError::TransactionNotFound(*id))?;

        log::debug!("Found record: {record:?}");

        return Ok(record);
    }

    pub fn lookup(&self) -> &L {
        return &self.lookup;
    }
}
