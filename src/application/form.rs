use crate::config::Minimums;
use crate::domain::account::AccountContext;
use crate::domain::ports::Ledger;
use crate::domain::transaction::{Amount, OperationKind, TransactionDraft};
use crate::error::{Result, ValidationError};
use crate::validation::amount;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Total digits the amount column can hold.
pub const MAX_DIGITS: u32 = 12;
/// Digits after the decimal point the amount column can hold.
pub const DECIMAL_PLACES: u32 = 2;

/// A validation failure tied to the form field that caused it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {error}")]
pub struct FieldError {
    pub field: &'static str,
    #[source]
    pub error: ValidationError,
}

impl FieldError {
    fn amount(error: ValidationError) -> Self {
        Self {
            field: "amount",
            error,
        }
    }
}

/// Raw values as submitted by the user.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransactionInput<'a> {
    pub amount: Option<&'a str>,
    pub transfer_to: Option<&'a str>,
}

impl<'a> TransactionInput<'a> {
    pub fn amount(amount: &'a str) -> Self {
        Self {
            amount: Some(amount),
            transfer_to: None,
        }
    }

    pub fn with_transfer_to(mut self, transfer_to: &'a str) -> Self {
        self.transfer_to = Some(transfer_to);
        self
    }
}

/// A deposit, withdrawal or transfer form bound to one account.
///
/// The operation kind is fixed when the form is built and cannot be changed
/// by submitted data.
pub struct TransactionForm<'a> {
    kind: OperationKind,
    account: &'a AccountContext,
    minimums: &'a Minimums,
}

impl<'a> TransactionForm<'a> {
    pub fn new(kind: OperationKind, account: &'a AccountContext, minimums: &'a Minimums) -> Self {
        Self {
            kind,
            account,
            minimums,
        }
    }

    pub fn deposit(account: &'a AccountContext, minimums: &'a Minimums) -> Self {
        Self::new(OperationKind::Deposit, account, minimums)
    }

    pub fn withdraw(account: &'a AccountContext, minimums: &'a Minimums) -> Self {
        Self::new(OperationKind::Withdrawal, account, minimums)
    }

    pub fn transfer(account: &'a AccountContext, minimums: &'a Minimums) -> Self {
        Self::new(OperationKind::Transfer, account, minimums)
    }

    /// Coerces and validates the amount field.
    pub fn clean_amount(&self, raw: Option<&str>) -> std::result::Result<Amount, ValidationError> {
        let value = to_decimal(raw)?;
        amount::validate(self.kind, value, self.account, self.minimums)
    }

    /// Validates the submission and builds the draft the ledger will apply.
    pub fn clean(
        &self,
        input: &TransactionInput<'_>,
    ) -> std::result::Result<TransactionDraft, FieldError> {
        let amount = self.clean_amount(input.amount).map_err(FieldError::amount)?;
        let transfer_to = input
            .transfer_to
            .map(str::trim)
            .filter(|target| !target.is_empty())
            .map(str::to_owned);

        Ok(TransactionDraft {
            kind: self.kind,
            amount,
            transfer_to,
            balance_after_transaction: self.account.balance,
        })
    }

    /// Validates the submission and, if accepted, commits it to the ledger.
    ///
    /// Rejections surface as [`crate::error::TxFormsError::Validation`] and
    /// never reach the ledger.
    pub fn save(
        &self,
        input: &TransactionInput<'_>,
        ledger: &dyn Ledger,
    ) -> Result<TransactionDraft> {
        let draft = self.clean(input).map_err(|err| err.error)?;
        ledger.commit(draft.clone())?;
        info!(kind = %draft.kind, amount = %draft.amount, "transaction committed");
        Ok(draft)
    }
}

/// Parses the amount text the way a fixed-precision money column accepts it.
fn to_decimal(raw: Option<&str>) -> std::result::Result<Decimal, ValidationError> {
    let text = raw.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return Err(ValidationError::Required);
    }

    // Digit separators parse as Rust literals but are not numbers to a user.
    if text.contains('_') {
        return Err(ValidationError::InvalidNumber);
    }
    let value = Decimal::from_str(text).map_err(|_| ValidationError::InvalidNumber)?;

    let decimals = value.scale();
    let digits = (value.mantissa().unsigned_abs().to_string().len() as u32).max(decimals);
    if digits > MAX_DIGITS {
        return Err(ValidationError::TooManyDigits { max: MAX_DIGITS });
    }
    if decimals > DECIMAL_PLACES {
        return Err(ValidationError::TooManyDecimalPlaces {
            max: DECIMAL_PLACES,
        });
    }
    let whole_digits = digits - decimals;
    if whole_digits > MAX_DIGITS - DECIMAL_PLACES {
        return Err(ValidationError::TooManyWholeDigits {
            max: MAX_DIGITS - DECIMAL_PLACES,
        });
    }

    Ok(value)
}
