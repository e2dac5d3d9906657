mod account;
mod accounts;
pub mod input;
pub mod money;
mod report;
mod result;
mod transaction;

pub use account::{Account, AccountError, AccountResult};
pub use accounts::Accounts;
pub use money::Money;
pub use report::{AccountReport, HistoryReport};
pub use result::Result;
pub use transaction::{Transaction, TransactionData};
