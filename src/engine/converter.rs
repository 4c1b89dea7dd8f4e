use std::collections::VecDeque;
use tracing::debug;

use crate::engine::assembler::assemble;
use crate::engine::classifier::Classifier;
use crate::engine::errors::RowError;
use crate::engine::fee_splitter::split_fees;
use crate::engine::normalizer::normalize;
use crate::models::{NormalizedRecord, RawRow};
use crate::schema::ColumnSchema;

/// Runs single rows through normalization, classification, fee splitting and assembly.
pub struct Converter<'a> {
    schema: &'a ColumnSchema,
    classifier: &'a Classifier
}

impl<'a> Converter<'a> {
    pub fn new(schema: &'a ColumnSchema, classifier: &'a Classifier) -> Self {
        Self { schema, classifier }
    }

    /// Converts one source row into zero, one or more records.
    ///
    /// Derived fee rows go through the same pipeline via a queue, after the
    /// row that produced them, so a row's own record always comes first and
    /// its fees follow in column order. Records with a zero amount are dropped.
    pub fn convert_row(&self, row: RawRow) -> Result<Vec<NormalizedRecord>, RowError> {
        let mut queue = VecDeque::from([row]);
        let mut records = Vec::new();

        while let Some(row) = queue.pop_front() {
            let normalized = normalize(&row, self.schema)?;
            let category = self.classifier.classify(row.cell(self.schema.type_label));
            let resolution = split_fees(&row, &normalized, self.schema)?;

            queue.extend(resolution.derived);

            if resolution.amount.is_zero() {
                debug!("Row [{}]: zero amount, no record emitted", row.line);
                continue;
            }

            records.push(assemble(&normalized, category, resolution.amount, self.schema));
        }

        Ok(records)
    }
}
