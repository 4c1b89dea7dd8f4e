mod record;
mod row;
mod statement;

pub use record::NormalizedRecord;
pub use row::{NormalizedRow, RawRow};
pub use statement::{AccountType, Statement, StatementSettings};
