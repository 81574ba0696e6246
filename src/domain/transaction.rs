use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a transaction form. Each kind has its own amount rules.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Deposit,
    #[serde(alias = "withdraw")]
    Withdrawal,
    Transfer,
}

impl OperationKind {
    /// The serialized name, also used by `Display`.
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::Deposit => "deposit",
            OperationKind::Withdrawal => "withdrawal",
            OperationKind::Transfer => "transfer",
        }
    }

    /// Verb for rejection messages. Only withdrawal differs from its name
    /// ("You can withdraw at most ...").
    pub fn verb(&self) -> &'static str {
        match self {
            OperationKind::Withdrawal => "withdraw",
            other => other.name(),
        }
    }

    /// Whether the amount is bounded by the account ceiling and balance.
    pub fn debits_account(&self) -> bool {
        !matches!(self, OperationKind::Deposit)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A transaction amount that passed every rule of its operation kind.
///
/// Only the amount validator constructs these, so holding one means the
/// value was accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Amount(Decimal);

impl Amount {
    pub(crate) fn accepted(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An accepted transaction, ready to be handed to the ledger.
///
/// `balance_after_transaction` is stamped with the balance the form saw;
/// the ledger is responsible for applying the amount.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct TransactionDraft {
    pub kind: OperationKind,
    pub amount: Amount,
    pub transfer_to: Option<String>,
    pub balance_after_transaction: Decimal,
}
