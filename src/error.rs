use crate::domain::transaction::OperationKind;
use rust_decimal::Decimal;
use thiserror::Error;

/// A rejected form value.
///
/// Every variant is an expected, user-facing outcome. The `Display` output is
/// the message shown next to the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("This field is required.")]
    Required,
    #[error("Enter a number.")]
    InvalidNumber,
    #[error("Ensure that there are no more than {max} decimal places.")]
    TooManyDecimalPlaces { max: u32 },
    #[error("Ensure that there are no more than {max} digits in total.")]
    TooManyDigits { max: u32 },
    #[error("Ensure that there are no more than {max} digits before the decimal point.")]
    TooManyWholeDigits { max: u32 },
    #[error("{}", below_minimum_message(.kind, .minimum))]
    BelowMinimum { kind: OperationKind, minimum: Decimal },
    #[error("You can {} at most Rs.{ceiling}", .kind.verb())]
    AboveCeiling { kind: OperationKind, ceiling: Decimal },
    #[error(
        "You have Rs.{balance} in your account. You can not {} more than your account balance",
        .kind.verb()
    )]
    InsufficientBalance { kind: OperationKind, balance: Decimal },
    #[error("Please select a date range.")]
    IncompleteDateRange,
    #[error("Invalid date range")]
    InvalidDateRange,
}

fn below_minimum_message(kind: &OperationKind, minimum: &Decimal) -> String {
    match kind {
        OperationKind::Deposit => format!("You need to deposit at least Rs.{minimum}"),
        _ => format!("You can {} at least Rs.{minimum}", kind.verb()),
    }
}

#[derive(Error, Debug)]
pub enum TxFormsError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, TxFormsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minimum_messages_use_operation_wording() {
        let deposit = ValidationError::BelowMinimum {
            kind: OperationKind::Deposit,
            minimum: dec!(10),
        };
        assert_eq!(deposit.to_string(), "You need to deposit at least Rs.10");

        let transfer = ValidationError::BelowMinimum {
            kind: OperationKind::Transfer,
            minimum: dec!(25.50),
        };
        assert_eq!(transfer.to_string(), "You can transfer at least Rs.25.50");
    }

    #[test]
    fn test_balance_message() {
        let err = ValidationError::InsufficientBalance {
            kind: OperationKind::Withdrawal,
            balance: dec!(40),
        };
        assert_eq!(
            err.to_string(),
            "You have Rs.40 in your account. You can not withdraw more than your account balance"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: TxFormsError = ValidationError::InvalidDateRange.into();
        assert_eq!(err.to_string(), "Invalid date range");
    }
}
