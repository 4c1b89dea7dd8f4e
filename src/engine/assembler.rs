use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use crate::models::{NormalizedRecord, NormalizedRow};
use crate::schema::{ColumnSchema, ResolvedTag};
use crate::types::{Amount, Category};

const PART_SEPARATOR: &str = "|";

/// Builds the exported record from a normalized row and its resolved amount.
pub fn assemble(row: &NormalizedRow, category: Category, amount: Amount, schema: &ColumnSchema) -> NormalizedRecord {
    let payee = join_tagged(row, row.optional_cell(schema.payee), &schema.payee_suffixes);
    let memo = join_tagged(row, row.optional_cell(schema.memo), &schema.memo_suffixes);
    let id = transaction_id(row.date_posted, amount, &payee, &memo);

    NormalizedRecord {
        id,
        date_posted: row.date_posted,
        date_user: row.date_user,
        payee,
        memo,
        amount,
        category,
        reference: row.optional_cell(schema.reference).map(str::to_string),
        check_number: row.optional_cell(schema.check_number).map(str::to_string)
    }
}

/// `base|TAG: value|TAG: value`, skipping every empty part.
fn join_tagged(row: &NormalizedRow, base: Option<&str>, tags: &[ResolvedTag]) -> String {
    let tagged = tags
        .iter()
        .filter_map(|tag| row.optional_cell(Some(tag.index)).map(|value| format!("{}: {value}", tag.tag)));

    base.map(str::to_string)
        .into_iter()
        .chain(tagged)
        .collect::<Vec<_>>()
        .join(PART_SEPARATOR)
}

/// First 64 bits of SHA-256 over the record's date, amount, payee and memo, in hex.
pub fn transaction_id(date: NaiveDate, amount: Amount, payee: &str, memo: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{date}|{}|{payee}|{memo}", amount.canonical()).as_bytes());

    hex::encode(&hasher.finalize()[..8])
}
