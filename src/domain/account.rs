use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An account type and its per-transaction ceiling for withdrawals and
/// transfers.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AccountType {
    pub name: String,
    pub maximum_withdrawal_or_transfer_amount: Decimal,
}

impl AccountType {
    pub fn new(name: impl Into<String>, ceiling: Decimal) -> Self {
        Self {
            name: name.into(),
            maximum_withdrawal_or_transfer_amount: ceiling,
        }
    }

    pub fn ceiling(&self) -> Decimal {
        self.maximum_withdrawal_or_transfer_amount
    }
}

/// Read-only view of the account a transaction form is bound to.
///
/// Supplied by the ledger; validation never mutates it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AccountContext {
    pub balance: Decimal,
    pub account_type: AccountType,
}

impl AccountContext {
    pub fn new(balance: Decimal, account_type: AccountType) -> Self {
        Self {
            balance,
            account_type,
        }
    }
}
