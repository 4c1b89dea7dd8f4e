use serde::{Deserialize, Serialize};

use crate::engine::Classifier;
use crate::schema::errors::SchemaError;
use crate::types::Category;

/// Declarative description of one generation of the bank's CSV export.
///
/// Every label listed here must be present in the header row; optional fields
/// that a generation does not carry are simply left out. New export formats are
/// added by declaring another profile, either in code or in a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaProfile {
    pub name: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_quote")]
    pub quote: char,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    pub columns: ColumnLabels,
    /// Auxiliary money columns, in the order they are split off the primary amount.
    #[serde(default)]
    pub fees: Vec<FeeColumn>,
    #[serde(default)]
    pub payee_suffixes: Vec<TaggedColumn>,
    #[serde(default)]
    pub memo_suffixes: Vec<TaggedColumn>
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnLabels {
    pub date_posted: String,
    #[serde(default)]
    pub date_user: Option<String>,
    #[serde(default)]
    pub payee: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
    pub amount: String,
    pub type_label: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub check_number: Option<String>
}

/// A fee-like column and the type label its derived row is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeColumn {
    pub label: String,
    pub marker: String
}

/// A column appended to the payee or memo as `tag: value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedColumn {
    pub label: String,
    pub tag: String
}

fn default_delimiter() -> char {
    ';'
}

fn default_quote() -> char {
    '"'
}

fn default_decimal_separator() -> char {
    ','
}

fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

impl FeeColumn {
    fn new(label: &str, marker: &str) -> Self {
        Self { label: label.to_string(), marker: marker.to_string() }
    }
}

impl TaggedColumn {
    fn new(label: &str, tag: &str) -> Self {
        Self { label: label.to_string(), tag: tag.to_string() }
    }
}

impl SchemaProfile {
    /// Legacy eKonto history export with one column per fee kind.
    pub fn ekonto() -> Self {
        Self {
            name: "ekonto".to_string(),
            delimiter: default_delimiter(),
            quote: default_quote(),
            decimal_separator: default_decimal_separator(),
            date_format: default_date_format(),
            columns: ColumnLabels {
                date_posted: "Datum odepsání".to_string(),
                date_user: Some("Datum".to_string()),
                payee: Some("Název účtu".to_string()),
                memo: Some("Poznámka".to_string()),
                amount: "Částka".to_string(),
                type_label: "Typ".to_string(),
                reference: Some("Kód transakce".to_string()),
                check_number: Some("Variabilní symbol".to_string())
            },
            fees: vec![
                FeeColumn::new("Poplatek", "Poplatek"),
                FeeColumn::new("Směna", "Směna"),
                FeeColumn::new("Zpráva", "Zpráva"),
            ],
            payee_suffixes: vec![TaggedColumn::new("Číslo účtu", "ÚČ")],
            memo_suffixes: vec![
                TaggedColumn::new("Variabilní symbol", "VS"),
                TaggedColumn::new("Konstantní symbol", "KS"),
                TaggedColumn::new("Specifický symbol", "SS"),
            ]
        }
    }

    /// Current internet-banking export with a single fee column.
    pub fn online() -> Self {
        Self {
            name: "online".to_string(),
            delimiter: default_delimiter(),
            quote: default_quote(),
            decimal_separator: default_decimal_separator(),
            date_format: default_date_format(),
            columns: ColumnLabels {
                date_posted: "Datum zaúčtování".to_string(),
                date_user: Some("Datum provedení".to_string()),
                payee: Some("Název protiúčtu".to_string()),
                memo: Some("Poznámka".to_string()),
                amount: "Zaúčtovaná částka".to_string(),
                type_label: "Typ transakce".to_string(),
                reference: Some("Id transakce".to_string()),
                check_number: Some("VS".to_string())
            },
            fees: vec![FeeColumn::new("Poplatek", "Poplatek")],
            payee_suffixes: vec![TaggedColumn::new("Číslo protiúčtu", "ÚČ")],
            memo_suffixes: vec![
                TaggedColumn::new("VS", "VS"),
                TaggedColumn::new("KS", "KS"),
                TaggedColumn::new("SS", "SS"),
            ]
        }
    }

    /// Looks up a built-in profile by name.
    pub fn builtin(name: &str) -> Result<Self, SchemaError> {
        builtin_profiles()
            .into_iter()
            .find(|profile| profile.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| SchemaError::UnknownProfile(name.to_string()))
    }

    pub fn from_toml(content: &str) -> Result<Self, SchemaError> {
        let profile: SchemaProfile = toml::from_str(content)
            .map_err(|error| SchemaError::InvalidProfile(error.to_string()))?;

        profile.validate()?;

        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        for (what, character) in [("delimiter", self.delimiter), ("quote", self.quote)] {
            if !character.is_ascii() {
                return Err(SchemaError::InvalidProfile(format!(
                    "{what} {character:?} of profile [{}] must be a single ASCII character", self.name
                )));
            }
        }

        if self.date_format.trim().is_empty() {
            return Err(SchemaError::InvalidProfile(format!("Profile [{}] has an empty date format", self.name)));
        }

        // Split-off fee rows are classified by their marker, so it has to land on FEE.
        let classifier = Classifier::default();

        for fee in &self.fees {
            if classifier.classify(&fee.marker) != Category::Fee {
                return Err(SchemaError::InvalidProfile(format!(
                    "Fee column [{}] of profile [{}] has marker {:?}, which does not classify as a fee",
                    fee.label, self.name, fee.marker
                )));
            }
        }

        Ok(())
    }

    // Only meaningful after `validate`, which rejects non-ASCII characters.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }

    pub fn quote_byte(&self) -> u8 {
        self.quote as u8
    }
}

/// Built-in profiles, newest generation first. Auto-detection tries them in this order.
pub fn builtin_profiles() -> Vec<SchemaProfile> {
    vec![SchemaProfile::online(), SchemaProfile::ekonto()]
}
