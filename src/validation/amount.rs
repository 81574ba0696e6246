use crate::config::Minimums;
use crate::domain::account::AccountContext;
use crate::domain::transaction::{Amount, OperationKind};
use crate::error::ValidationError;
use rust_decimal::Decimal;
use tracing::debug;

/// Decides whether `amount` is acceptable for `kind` on the given account.
///
/// Deposits only need to reach the configured minimum. Withdrawals and
/// transfers are checked against the minimum, then the account type's
/// ceiling, then the balance; the first failing check is reported.
pub fn validate(
    kind: OperationKind,
    amount: Decimal,
    account: &AccountContext,
    minimums: &Minimums,
) -> Result<Amount, ValidationError> {
    let outcome = check(kind, amount, account, minimums);
    if let Err(reason) = &outcome {
        debug!(%kind, %amount, %reason, "amount rejected");
    }
    outcome
}

fn check(
    kind: OperationKind,
    amount: Decimal,
    account: &AccountContext,
    minimums: &Minimums,
) -> Result<Amount, ValidationError> {
    let minimum = minimums.for_kind(kind);
    if amount < minimum {
        return Err(ValidationError::BelowMinimum { kind, minimum });
    }

    if kind.debits_account() {
        let ceiling = account.account_type.ceiling();
        if amount > ceiling {
            return Err(ValidationError::AboveCeiling { kind, ceiling });
        }

        if amount > account.balance {
            return Err(ValidationError::InsufficientBalance {
                kind,
                balance: account.balance,
            });
        }
    }

    Ok(Amount::accepted(amount))
}
