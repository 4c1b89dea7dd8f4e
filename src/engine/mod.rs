mod assembler;
mod classifier;
mod converter;
mod errors;
mod fee_splitter;
mod normalizer;
mod statement_engine;

pub use classifier::Classifier;
#[cfg(test)]
pub use errors::{ConvertError, RowError};
pub use statement_engine::{EngineOptions, ProfileSelection, StatementEngine};
