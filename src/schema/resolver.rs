use tracing::debug;

use crate::schema::errors::SchemaError;
use crate::schema::profile::{SchemaProfile, TaggedColumn};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Zero-based column positions for one input file, resolved from its header row.
///
/// Built once per file and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSchema {
    pub profile: String,
    pub date_posted: usize,
    pub date_user: Option<usize>,
    pub payee: Option<usize>,
    pub memo: Option<usize>,
    pub amount: usize,
    pub type_label: usize,
    pub reference: Option<usize>,
    pub check_number: Option<usize>,
    pub fees: Vec<ResolvedFee>,
    pub payee_suffixes: Vec<ResolvedTag>,
    pub memo_suffixes: Vec<ResolvedTag>,
    pub decimal_separator: char,
    pub date_format: String,
    labels: Vec<String>
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFee {
    pub index: usize,
    pub marker: String
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTag {
    pub index: usize,
    pub tag: String
}

impl ColumnSchema {
    /// Maps every label the profile declares onto its position in `header`.
    ///
    /// # Errors
    /// Returns `SchemaError::MissingLabel` naming the first declared label that
    /// the header does not contain.
    pub fn resolve<S: AsRef<str>>(header: &[S], profile: &SchemaProfile) -> Result<Self, SchemaError> {
        let labels: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let cell = cell.as_ref();
                let cell = if index == 0 { cell.trim_start_matches(BYTE_ORDER_MARK) } else { cell };
                cell.trim().to_string()
            })
            .collect();

        let find = |label: &str| -> Result<usize, SchemaError> {
            labels.iter().position(|candidate| candidate == label).ok_or_else(|| SchemaError::MissingLabel {
                label: label.to_string(),
                profile: profile.name.clone()
            })
        };
        let find_optional = |label: &Option<String>| label.as_deref().map(&find).transpose();
        let find_tagged = |columns: &[TaggedColumn]| -> Result<Vec<ResolvedTag>, SchemaError> {
            columns
                .iter()
                .map(|column| -> Result<ResolvedTag, SchemaError> {
                    Ok(ResolvedTag { index: find(&column.label)?, tag: column.tag.clone() })
                })
                .collect()
        };

        let columns = &profile.columns;

        let schema = Self {
            profile: profile.name.clone(),
            date_posted: find(&columns.date_posted)?,
            date_user: find_optional(&columns.date_user)?,
            payee: find_optional(&columns.payee)?,
            memo: find_optional(&columns.memo)?,
            amount: find(&columns.amount)?,
            type_label: find(&columns.type_label)?,
            reference: find_optional(&columns.reference)?,
            check_number: find_optional(&columns.check_number)?,
            fees: profile
                .fees
                .iter()
                .map(|fee| -> Result<ResolvedFee, SchemaError> {
                    Ok(ResolvedFee { index: find(&fee.label)?, marker: fee.marker.clone() })
                })
                .collect::<Result<Vec<_>, _>>()?,
            payee_suffixes: find_tagged(&profile.payee_suffixes)?,
            memo_suffixes: find_tagged(&profile.memo_suffixes)?,
            decimal_separator: profile.decimal_separator,
            date_format: profile.date_format.clone(),
            labels
        };

        debug!("Resolved header against profile [{}]: {schema:?}", profile.name);

        Ok(schema)
    }

    /// Header label of a column, for error messages.
    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map(String::as_str).unwrap_or("?")
    }
}

/// Picks the first profile whose labels all resolve against `header`.
pub fn detect<S: AsRef<str>>(header: &[S], profiles: &[SchemaProfile]) -> Result<(SchemaProfile, ColumnSchema), SchemaError> {
    for profile in profiles {
        match ColumnSchema::resolve(header, profile) {
            Ok(schema) => return Ok((profile.clone(), schema)),
            Err(error) => debug!("Profile [{}] rejected: {error}", profile.name)
        }
    }

    let tried = profiles.iter().map(|profile| profile.name.as_str()).collect::<Vec<_>>().join(", ");

    Err(SchemaError::NoMatchingProfile { tried })
}
