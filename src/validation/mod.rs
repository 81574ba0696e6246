//! Pure validation rules: transaction amounts and date-range filters.

pub mod amount;
pub mod date_range;
