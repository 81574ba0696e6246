//! Domain types shared by the validators and forms: account context, operation
//! kinds, accepted amounts and the ledger port.

pub mod account;
pub mod ports;
pub mod transaction;
