use super::transaction::TransactionDraft;
use crate::error::Result;

/// The ledger that applies accepted transactions.
///
/// Forms call this only after validation succeeds. Crediting or debiting the
/// balance and persisting the record happen on the other side of this trait.
pub trait Ledger: Send + Sync {
    fn commit(&self, draft: TransactionDraft) -> Result<()>;
}
