use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{Amount, Category};

/// A single statement line ready for export.
///
/// The amount is never zero; rows that collapse to zero are dropped before a
/// record is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    /// Stable hash of date, amount, payee and memo, made unique per statement.
    pub id: String,
    pub date_posted: NaiveDate,
    pub date_user: Option<NaiveDate>,
    pub payee: String,
    pub memo: String,
    pub amount: Amount,
    pub category: Category,
    /// Bank-side transaction code or id.
    pub reference: Option<String>,
    /// Variable symbol, exported as the cheque number.
    pub check_number: Option<String>
}
