use chrono::NaiveDate;

use crate::types::{Amount, RowNumber};

/// One source line after delimiter and quote parsing, cells untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub line: RowNumber,
    pub cells: Vec<String>
}

impl RawRow {
    pub fn new(line: RowNumber, cells: Vec<String>) -> Self {
        Self { line, cells }
    }

    /// Cell at `index`, or an empty string when the line is shorter than the header.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn set_cell(&mut self, index: usize, value: &str) {
        if self.cells.len() <= index {
            self.cells.resize(index + 1, String::new());
        }

        self.cells[index] = value.to_string();
    }
}

/// A row whose cells are trimmed and whose money and date columns are parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub line: RowNumber,
    pub cells: Vec<String>,
    pub date_posted: NaiveDate,
    pub date_user: Option<NaiveDate>,
    pub amount: Amount,
    /// Parsed auxiliary amounts, in the same order as the schema's fee columns.
    pub fees: Vec<Amount>
}

impl NormalizedRow {
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn optional_cell(&self, index: Option<usize>) -> Option<&str> {
        index.map(|index| self.cell(index)).filter(|value| !value.is_empty())
    }
}
