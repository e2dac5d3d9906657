use crate::Money;

use std::ops::Deref;

/// Fields shared by every kind of transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionData {
    pub amount: Money,
    pub balance_after: Money,
    pub note: String,
}

/// Record of one balance-affecting event on an account.
///
/// A transfer produces a `TransferOut` on the source account and a matching `TransferIn`
/// on the target account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Deposit(TransactionData),
    Withdraw(TransactionData),
    TransferOut(TransactionData),
    TransferIn(TransactionData),
}

impl Transaction {
    pub fn kind(&self) -> &'static str {
        return match self {
            Self::Deposit(_) => "deposit",
            Self::Withdraw(_) => "withdraw",
            Self::TransferOut(_) => "transfer_out",
            Self::TransferIn(_) => "transfer_in",
        };
    }
}

impl Deref for Transaction {
    type Target = TransactionData;

    fn deref(&self) -> &Self::Target {
        return match self {
            Self::Deposit(data) => data,
            Self::Withdraw(data) => data,
            Self::TransferOut(data) => data,
            Self::TransferIn(data) => data,
        };
    }
}
