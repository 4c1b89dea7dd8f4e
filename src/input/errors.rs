use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Unknown character encoding [{0}]")]
    UnknownEncoding(String),
    #[error("Error reading input at path: {path} | {source}")]
    Read {
        path: String,
        source: std::io::Error
    }
}
