use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::engine::{EngineOptions, ProfileSelection};
use crate::export::OutputFormat;
use crate::models::{AccountType, StatementSettings};
use crate::schema::SchemaProfile;

const AUTO_PROFILE: &str = "auto";

/// Converts Raiffeisenbank (CZ) CSV transaction history into OFX or normalized CSV.
#[derive(Debug, Parser)]
#[command(name = "raiffeisen-statement", version, about)]
pub struct Args {
    /// Bank export to convert
    pub input: PathBuf,

    /// Header layout to expect: auto, ekonto or online
    #[arg(long, default_value = AUTO_PROFILE)]
    pub profile: String,

    /// TOML file declaring a custom header layout; takes precedence over --profile
    #[arg(long)]
    pub profile_file: Option<PathBuf>,

    /// Field delimiter, overriding the profile's
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Quote character, overriding the profile's
    #[arg(long)]
    pub quote: Option<char>,

    /// Character encoding of the input file
    #[arg(long, default_value = "cp1250")]
    pub encoding: String,

    #[arg(long, default_value = "CZK")]
    pub currency: String,

    /// Bank identifier written to the statement
    #[arg(long, default_value = "RZBCCZPP")]
    pub bank: String,

    /// Account identifier written to the statement
    #[arg(long, default_value = "")]
    pub account: String,

    #[arg(long, value_enum, default_value_t = AccountType::Checking)]
    pub account_type: AccountType,

    #[arg(long, value_enum, default_value_t = OutputFormat::Ofx)]
    pub format: OutputFormat,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// error, warn, info, debug or trace
    #[arg(long, default_value = "error")]
    pub log_level: String
}

impl Args {
    pub fn profile_selection(&self) -> Result<ProfileSelection> {
        if let Some(path) = &self.profile_file {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Error reading profile file at path: {}", path.display()))?;

            return Ok(ProfileSelection::Fixed(SchemaProfile::from_toml(&content)?));
        }

        if self.profile.eq_ignore_ascii_case(AUTO_PROFILE) {
            return Ok(ProfileSelection::Auto);
        }

        Ok(ProfileSelection::Fixed(SchemaProfile::builtin(&self.profile)?))
    }

    pub fn settings(&self) -> StatementSettings {
        StatementSettings {
            currency: self.currency.clone(),
            bank_id: self.bank.clone(),
            account_id: self.account.clone(),
            account_type: self.account_type
        }
    }

    pub fn engine_options(&self) -> Result<EngineOptions> {
        Ok(EngineOptions {
            profile: self.profile_selection()?,
            delimiter: self.delimiter,
            quote: self.quote,
            settings: self.settings()
        })
    }
}
