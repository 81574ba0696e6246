//! Application layer: transaction forms that bind raw user input to an account,
//! run the amount rules and hand accepted drafts to the ledger.

pub mod form;
