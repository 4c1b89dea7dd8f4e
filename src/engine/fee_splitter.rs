use tracing::debug;

use crate::engine::errors::RowError;
use crate::models::{NormalizedRow, RawRow};
use crate::schema::{ColumnSchema, ResolvedFee};
use crate::types::Amount;

/// Outcome of fee processing for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeResolution {
    /// Amount the row's own record carries.
    pub amount: Amount,
    /// Rows synthesized for fees that stand next to a nonzero amount.
    pub derived: Vec<RawRow>
}

/// Decides, per nonzero fee column, whether to fold or split.
///
/// Every fee is compared against the row's original amount. When that amount
/// is zero the fee becomes the transaction amount; if several fees are
/// nonzero they are summed. When it is nonzero the fee gets a derived row of
/// its own and the original amount is left as is.
///
/// # Errors
/// Returns `RowError::Overflow` if summing fees overflows.
pub fn split_fees(row: &RawRow, normalized: &NormalizedRow, schema: &ColumnSchema) -> Result<FeeResolution, RowError> {
    let original = normalized.amount;
    let mut amount = original;
    let mut derived = Vec::new();

    for (fee, column) in normalized.fees.iter().zip(&schema.fees) {
        if fee.is_zero() {
            continue;
        }

        if original.is_zero() {
            amount = amount.checked_add(*fee).ok_or_else(|| RowError::overflow(row))?;
            debug!("Row [{}]: folded fee [{}] {fee} into the amount", row.line, column.marker);
        } else {
            derived.push(derive_fee_row(row, schema, column));
            debug!("Row [{}]: split fee [{}] {fee} into a separate transaction", row.line, column.marker);
        }
    }

    Ok(FeeResolution { amount, derived })
}

/// Copy of `row` with the fee promoted to the amount column, every fee column
/// cleared and the type label replaced by the fee's marker.
fn derive_fee_row(row: &RawRow, schema: &ColumnSchema, fee: &ResolvedFee) -> RawRow {
    let mut derived = row.clone();

    derived.set_cell(schema.amount, row.cell(fee.index));

    for column in &schema.fees {
        derived.set_cell(column.index, "");
    }

    derived.set_cell(schema.type_label, &fee.marker);

    derived
}
