mod errors;
mod profile;
mod resolver;
#[cfg(test)]
mod tests;

pub use errors::SchemaError;
pub use profile::{builtin_profiles, SchemaProfile};
pub use resolver::{detect, ColumnSchema, ResolvedFee, ResolvedTag};
