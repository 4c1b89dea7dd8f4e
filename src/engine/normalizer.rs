use chrono::NaiveDate;

use crate::engine::errors::RowError;
use crate::models::{NormalizedRow, RawRow};
use crate::schema::ColumnSchema;
use crate::types::Amount;

/// Trims every cell and parses the money and date columns the schema names.
///
/// # Errors
/// Returns `RowError::MalformedAmount` for a money cell that is not a decimal
/// once separators and currency noise are removed, and `RowError::InvalidDate`
/// for a date cell that does not match the profile's format. An empty posting
/// date is invalid; an empty user date is just absent.
pub fn normalize(row: &RawRow, schema: &ColumnSchema) -> Result<NormalizedRow, RowError> {
    let cells: Vec<String> = row.cells.iter().map(|cell| cell.trim().to_string()).collect();
    let cell = |index: usize| cells.get(index).map(String::as_str).unwrap_or("");

    let parse_amount = |index: usize| {
        Amount::parse_localized(cell(index), schema.decimal_separator)
            .map_err(|_| RowError::malformed_amount(row, schema, index))
    };

    let parse_date = |index: usize| -> Result<Option<NaiveDate>, RowError> {
        // Newer exports append the time of day to the date.
        let Some(token) = cell(index).split_whitespace().next() else {
            return Ok(None)
        };

        NaiveDate::parse_from_str(token, &schema.date_format)
            .map(Some)
            .map_err(|_| RowError::invalid_date(row, schema, index))
    };

    let amount = parse_amount(schema.amount)?;
    let fees = schema
        .fees
        .iter()
        .map(|fee| parse_amount(fee.index))
        .collect::<Result<Vec<_>, _>>()?;

    let date_posted = parse_date(schema.date_posted)?
        .ok_or_else(|| RowError::invalid_date(row, schema, schema.date_posted))?;
    let date_user = match schema.date_user {
        Some(index) => parse_date(index)?,
        None => None
    };

    Ok(NormalizedRow {
        line: row.line,
        cells,
        date_posted,
        date_user,
        amount,
        fees
    })
}
