use chrono::NaiveDate;
use clap::ValueEnum;
use std::collections::HashSet;
use tracing::debug;

use crate::models::NormalizedRecord;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    Moneymrkt,
    Creditline
}

impl AccountType {
    pub fn ofx_code(&self) -> &'static str {
        match self {
            AccountType::Checking => "CHECKING",
            AccountType::Savings => "SAVINGS",
            AccountType::Moneymrkt => "MONEYMRKT",
            AccountType::Creditline => "CREDITLINE"
        }
    }
}

/// Statement-level defaults that the bank export itself does not carry.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementSettings {
    pub currency: String,
    pub bank_id: String,
    pub account_id: String,
    pub account_type: AccountType
}

impl Default for StatementSettings {
    fn default() -> Self {
        Self {
            currency: "CZK".to_string(),
            bank_id: "RZBCCZPP".to_string(),
            account_id: String::new(),
            account_type: AccountType::Checking
        }
    }
}

/// Ordered output of one conversion run.
#[derive(Debug, Clone)]
pub struct Statement {
    pub settings: StatementSettings,
    records: Vec<NormalizedRecord>,
    ids: HashSet<String>
}

impl Statement {
    pub fn new(settings: StatementSettings) -> Self {
        Self {
            settings,
            records: Vec::new(),
            ids: HashSet::new()
        }
    }

    /// Appends a record, suffixing its id with `-1`, `-2`, ... if an earlier
    /// record already holds the same id.
    pub fn push(&mut self, mut record: NormalizedRecord) {
        if self.ids.contains(&record.id) {
            let base = record.id.clone();
            let mut counter = 1;

            while self.ids.contains(&format!("{base}-{counter}")) {
                counter += 1;
            }

            record.id = format!("{base}-{counter}");
            debug!("Transaction id [{base}] already used, renamed to [{}]", record.id);
        }

        self.ids.insert(record.id.clone());
        self.records.push(record);
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Earliest and latest posting date, if there are any records.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|record| record.date_posted).min()?;
        let last = self.records.iter().map(|record| record.date_posted).max()?;

        Some((first, last))
    }
}
