use crate::domain::account::{AccountContext, AccountType};
use crate::domain::transaction::OperationKind;
use crate::error::{Result, TxFormsError};
use rust_decimal::Decimal;
use csv::StringRecord;
use serde::Deserialize;
use std::io::Read;

/// One row of a batch check: the submitted amount text plus the account
/// context it is validated against.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct TransactionRequest {
    pub kind: OperationKind,
    #[serde(with = "rust_decimal::serde::str")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub ceiling: Decimal,
    #[serde(default)]
    pub amount: String,
}

impl TransactionRequest {
    pub fn account(&self) -> AccountContext {
        AccountContext::new(self.balance, AccountType::new("batch", self.ceiling))
    }
}

/// Batch requests from a CSV source with a header row.
///
/// Records shorter than the header are padded with empty fields, so a
/// missing trailing `amount` is judged by the form as a blank submission
/// instead of failing to deserialize.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Reads the header row and returns the remaining rows as requests.
    pub fn requests(mut self) -> Result<Requests<R>> {
        let headers = self.reader.headers()?.clone();
        Ok(Requests {
            headers,
            records: self.reader.into_records(),
        })
    }
}

/// Iterator over the rows of a [`RequestReader`], one `Result` per row.
pub struct Requests<R: Read> {
    headers: StringRecord,
    records: csv::StringRecordsIntoIter<R>,
}

impl<R: Read> Requests<R> {
    fn decode(&self, mut record: StringRecord) -> Result<TransactionRequest> {
        while record.len() < self.headers.len() {
            record.push_field("");
        }
        Ok(record.deserialize(Some(&self.headers))?)
    }
}

impl<R: Read> Iterator for Requests<R> {
    type Item = Result<TransactionRequest>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map_err(TxFormsError::from)
                .and_then(|record| self.decode(record)),
        )
    }
}
