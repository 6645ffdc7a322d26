mod party_id;
mod transaction_id;

pub use party_id::PartyId;
pub use transaction_id::TransactionId;
