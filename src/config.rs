use crate::domain::transaction::OperationKind;
use crate::error::{Result, TxFormsError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Process-wide minimum amounts per operation kind.
///
/// Loaded once at startup and passed by reference into every validation call.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Minimums {
    #[serde(rename = "minimum_deposit_amount")]
    pub deposit: Decimal,
    #[serde(rename = "minimum_withdrawal_amount")]
    pub withdrawal: Decimal,
    #[serde(rename = "minimum_transfer_amount")]
    pub transfer: Decimal,
}

impl Default for Minimums {
    fn default() -> Self {
        Self {
            deposit: dec!(10),
            withdrawal: dec!(10),
            transfer: dec!(10),
        }
    }
}

impl Minimums {
    /// Reads minimums from a JSON document. Missing keys keep their defaults.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let minimums: Self = serde_json::from_reader(source)?;
        minimums.validate()?;
        Ok(minimums)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn validate(&self) -> Result<()> {
        for kind in [
            OperationKind::Deposit,
            OperationKind::Withdrawal,
            OperationKind::Transfer,
        ] {
            if self.for_kind(kind).is_sign_negative() {
                return Err(TxFormsError::Config(format!(
                    "minimum {kind} amount must not be negative"
                )));
            }
        }
        Ok(())
    }

    pub fn for_kind(&self, kind: OperationKind) -> Decimal {
        match kind {
            OperationKind::Deposit => self.deposit,
            OperationKind::Withdrawal => self.withdrawal,
            OperationKind::Transfer => self.transfer,
        }
    }
}
