mod groups;
mod loader;
mod record;
mod transaction;
mod transaction_store;

pub use groups::BeneficiaryGroups;
pub use loader::{LoadError, SourceFormat, read_transactions};
pub use record::{InputRecord, RecordError};
pub use transaction::Transaction;
pub use transaction_store::TransactionStore;
