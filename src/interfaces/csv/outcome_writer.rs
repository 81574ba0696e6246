use crate::domain::transaction::OperationKind;
use crate::error::ValidationError;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Accepted,
    Rejected,
}

/// The verdict for one batch row.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Outcome {
    pub row: u64,
    pub kind: OperationKind,
    pub amount: String,
    pub status: OutcomeStatus,
    pub reason: String,
}

impl Outcome {
    pub fn accepted(row: u64, kind: OperationKind, amount: impl ToString) -> Self {
        Self {
            row,
            kind,
            amount: amount.to_string(),
            status: OutcomeStatus::Accepted,
            reason: String::new(),
        }
    }

    pub fn rejected(row: u64, kind: OperationKind, amount: &str, reason: &ValidationError) -> Self {
        Self {
            row,
            kind,
            amount: amount.to_owned(),
            status: OutcomeStatus::Rejected,
            reason: reason.to_string(),
        }
    }
}

/// Writes batch outcomes as CSV with a header row.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(destination: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(destination),
        }
    }

    pub fn write_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        self.writer.serialize(outcome).map_err(io::Error::other)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
