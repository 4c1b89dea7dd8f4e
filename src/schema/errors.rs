use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Header label [{label}] required by profile [{profile}] was not found")]
    MissingLabel {
        label: String,
        profile: String
    },
    #[error("Header row does not match any known profile (tried: {tried})")]
    NoMatchingProfile {
        tried: String
    },
    #[error("Unknown schema profile [{0}]")]
    UnknownProfile(String),
    #[error("Invalid schema profile: {0}")]
    InvalidProfile(String)
}
