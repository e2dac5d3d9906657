use serde::{Deserialize, Serialize};

/// One row of the default account summary
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountReport {
    pub name: String,
    pub balance: String,
    pub frozen: bool,
    pub transactions: usize,
}

/// One history entry of one account
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct HistoryReport {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: String,
    pub amount: String,
    pub balance_after: String,
    pub note: String,
}
