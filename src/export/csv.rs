use std::io::Write;

use crate::export::errors::ExportError;
use crate::models::Statement;

pub fn write_csv<W: Write>(statement: &Statement, output: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(output);

    for record in statement.records() {
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}
