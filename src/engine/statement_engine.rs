use csv::ReaderBuilder;
use std::io::Read;
use tracing::info;

use crate::engine::classifier::Classifier;
use crate::engine::converter::Converter;
use crate::engine::errors::ConvertError;
use crate::models::{RawRow, Statement, StatementSettings};
use crate::schema::{builtin_profiles, detect, ColumnSchema, SchemaError, SchemaProfile};

/// Which header layout to expect.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSelection {
    /// Try the built-in profiles against the header, newest first.
    Auto,
    Fixed(SchemaProfile)
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub profile: ProfileSelection,
    /// Overrides the profile's delimiter.
    pub delimiter: Option<char>,
    /// Overrides the profile's quote character.
    pub quote: Option<char>,
    pub settings: StatementSettings
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            profile: ProfileSelection::Auto,
            delimiter: None,
            quote: None,
            settings: StatementSettings::default()
        }
    }
}

/// Converts a decoded bank export into a statement, failing on the first bad row.
pub struct StatementEngine {
    options: EngineOptions,
    classifier: Classifier
}

impl StatementEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            classifier: Classifier::default()
        }
    }

    /// Reads the header, resolves the column schema, then converts every data row in order.
    pub fn run<R: Read>(&self, input: R) -> Result<Statement, ConvertError> {
        let dialect = self.dialect()?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(dialect.delimiter_byte())
            .quote(dialect.quote_byte())
            .from_reader(input);

        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        if header.iter().all(|cell| cell.trim().is_empty()) {
            return Err(ConvertError::MissingHeader);
        }

        let schema = match &self.options.profile {
            ProfileSelection::Auto => detect(&header, &builtin_profiles())?.1,
            ProfileSelection::Fixed(profile) => ColumnSchema::resolve(&header, profile)?
        };

        info!("Using schema profile [{}]", schema.profile);

        let converter = Converter::new(&schema, &self.classifier);
        let mut statement = Statement::new(self.options.settings.clone());
        let mut rows = 0usize;

        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|position| position.line()).unwrap_or_default();
            let row = RawRow::new(line, record.iter().map(str::to_string).collect());

            for normalized in converter.convert_row(row)? {
                statement.push(normalized);
            }

            rows += 1;
        }

        info!("Converted {rows} rows into {} transactions", statement.len());

        Ok(statement)
    }

    /// Delimiter and quote to read the file with. With auto-detection the
    /// header has to be split before a profile is known, so the defaults
    /// shared by the built-in profiles are used.
    fn dialect(&self) -> Result<SchemaProfile, SchemaError> {
        let mut dialect = match &self.options.profile {
            ProfileSelection::Auto => SchemaProfile::online(),
            ProfileSelection::Fixed(profile) => profile.clone()
        };

        if let Some(delimiter) = self.options.delimiter {
            dialect.delimiter = delimiter;
        }

        if let Some(quote) = self.options.quote {
            dialect.quote = quote;
        }

        dialect.validate()?;

        Ok(dialect)
    }
}
