mod party;
mod role;
mod role_report;
mod transaction_record;

pub use party::{Party, ResolvedRoles};
pub use role::{PostType, Role, RoleParseError};
pub use role_report::RoleReport;
pub use transaction_record::TransactionRecord;
