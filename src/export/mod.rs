mod csv;
mod errors;
mod ofx;

use chrono::NaiveDateTime;
use clap::ValueEnum;
use std::io::Write;

use crate::models::Statement;

pub use errors::ExportError;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Ofx,
    Csv
}

/// Serializes a finished statement. `generated` is stamped into OFX headers.
pub fn write_statement<W: Write>(statement: &Statement, format: OutputFormat, generated: NaiveDateTime, output: W) -> Result<(), ExportError> {
    match format {
        OutputFormat::Ofx => ofx::write_ofx(statement, generated, output),
        OutputFormat::Csv => csv::write_csv(statement, output)
    }
}
