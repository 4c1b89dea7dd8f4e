mod amount;
mod category;
mod errors;

pub use amount::Amount;
pub use category::Category;

/// One-based line number of a row in the source file.
pub type RowNumber = u64;
