use thiserror::Error;

use crate::models::RawRow;
use crate::schema::{ColumnSchema, SchemaError};
use crate::types::RowNumber;

#[derive(Debug, Error)]
pub enum RowError {
    #[error("Row [{row}]: column [{column}] value {value:?} is not a valid amount")]
    MalformedAmount {
        row: RowNumber,
        column: String,
        value: String
    },
    #[error("Row [{row}]: column [{column}] value {value:?} is not a date in format [{format}]")]
    InvalidDate {
        row: RowNumber,
        column: String,
        value: String,
        format: String
    },
    #[error("Row [{row}]: fee amounts overflow when folded into the transaction amount")]
    Overflow {
        row: RowNumber
    }
}

impl RowError {
    pub fn malformed_amount(row: &RawRow, schema: &ColumnSchema, index: usize) -> Self {
        Self::MalformedAmount {
            row: row.line,
            column: schema.label(index).to_string(),
            value: row.cell(index).to_string()
        }
    }

    pub fn invalid_date(row: &RawRow, schema: &ColumnSchema, index: usize) -> Self {
        Self::InvalidDate {
            row: row.line,
            column: schema.label(index).to_string(),
            value: row.cell(index).to_string(),
            format: schema.date_format.clone()
        }
    }

    pub fn overflow(row: &RawRow) -> Self {
        Self::Overflow { row: row.line }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Row(#[from] RowError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Input has no header row")]
    MissingHeader
}
