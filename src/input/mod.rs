mod errors;

use encoding_rs::Encoding;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub use errors::InputError;

/// Decodes raw bytes with the encoding named by a WHATWG label such as `cp1250`.
pub fn decode(bytes: &[u8], label: &str) -> Result<String, InputError> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| InputError::UnknownEncoding(label.to_string()))?;

    let (text, used, had_errors) = encoding.decode(bytes);

    if had_errors {
        warn!("Input contains byte sequences that are invalid in {}, replaced with U+FFFD", used.name());
    }

    debug!("Decoded {} bytes as {}", bytes.len(), used.name());

    Ok(text.into_owned())
}

pub fn read_file(path: &Path, label: &str) -> Result<String, InputError> {
    let bytes = fs::read(path).map_err(|source| InputError::Read { path: path.display().to_string(), source })?;

    decode(&bytes, label)
}
