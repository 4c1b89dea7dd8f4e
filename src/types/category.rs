use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Transaction category, named after the OFX `TRNTYPE` it exports as.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "XFER")]
    Transfer,
    #[serde(rename = "CREDIT")]
    Credit,
    #[serde(rename = "REPEATPMT")]
    RecurringPayment,
    #[serde(rename = "INT")]
    Interest,
    #[serde(rename = "DIRECTDEBIT")]
    DirectDebit,
    #[serde(rename = "DEBIT")]
    Debit,
    #[serde(rename = "FEE")]
    Fee,
    #[default]
    #[serde(rename = "OTHER")]
    Other
}

impl Category {
    pub fn ofx_code(&self) -> &'static str {
        match self {
            Category::Transfer => "XFER",
            Category::Credit => "CREDIT",
            Category::RecurringPayment => "REPEATPMT",
            Category::Interest => "INT",
            Category::DirectDebit => "DIRECTDEBIT",
            Category::Debit => "DEBIT",
            Category::Fee => "FEE",
            Category::Other => "OTHER"
        }
    }
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.ofx_code())
    }
}
