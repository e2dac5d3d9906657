use crate::money::MoneyError;
use crate::{Money, Transaction, TransactionData};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid amount: {0}, amount must be positive")]
    InvalidAmount(Money),

    #[error("Insufficient funds: requested {requested} but only {available} available")]
    InsufficientFunds { requested: Money, available: Money },

    #[error("Balance overflow: {0}")]
    Overflow(#[from] MoneyError),
}

pub type AccountResult<T = ()> = std::result::Result<T, AccountError>;

/// A single account holding a balance, a frozen flag and an append-only history.
///
/// Every successful mutation logs exactly one transaction per affected account before
/// returning. A failed mutation leaves balance and history untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    name: String,
    balance: Money,
    frozen: bool,
    history: Vec<Transaction>,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        return Self {
            name: name.into(),
            balance: Money::ZERO,
            frozen: false,
            history: Vec::new(),
        };
    }

    pub fn deposit(&mut self, amount: Money) -> AccountResult {
        self.require_not_frozen()?;
        require_positive(amount)?;

        self.balance = self.balance.checked_add(amount)?;
        self.log_transaction(Transaction::Deposit, amount, "Deposit successful".to_string());

        log::debug!("Deposited {amount} into {}, balance {}", self.name, self.balance);

        return Ok(());
    }

    pub fn withdraw(&mut self, amount: Money) -> AccountResult {
        self.require_not_frozen()?;
        require_positive(amount)?;
        self.require_funds(amount)?;

        self.balance = self.balance.checked_sub(amount)?;
        self.log_transaction(Transaction::Withdraw, amount, "Withdrawal successful".to_string());

        log::debug!("Withdrew {amount} from {}, balance {}", self.name, self.balance);

        return Ok(());
    }

    /// Moves `amount` from this account to `target`.
    ///
    /// Both new balances are computed before either account is touched, so a rejected
    /// transfer leaves both accounts as they were.
    pub fn transfer(&mut self, target: &mut Account, amount: Money) -> AccountResult {
        self.require_not_frozen()?;
        if target.frozen {
            Err(AccountError::InvalidOperation(format!(
                "Target account {} is frozen",
                target.name
            )))?;
        }
        require_positive(amount)?;
        self.require_funds(amount)?;

        let source_balance = self.balance.checked_sub(amount)?;
        let target_balance = target.balance.checked_add(amount)?;

        self.balance = source_balance;
        target.balance = target_balance;

        self.log_transaction(
            Transaction::TransferOut,
            amount,
            format!("Transferred to {}", target.name),
        );
        target.log_transaction(
            Transaction::TransferIn,
            amount,
            format!("Received from {}", self.name),
        );

        log::debug!("Transferred {amount} from {} to {}", self.name, target.name);

        return Ok(());
    }

    /// Transfer where source and target are this same account.
    ///
    /// The balance nets out unchanged, but the pair of transfer entries is still logged.
    pub fn transfer_to_self(&mut self, amount: Money) -> AccountResult {
        self.require_not_frozen()?;
        require_positive(amount)?;
        self.require_funds(amount)?;

        let note_out = format!("Transferred to {}", self.name);
        let note_in = format!("Received from {}", self.name);

        self.log_transaction(Transaction::TransferOut, amount, note_out);
        self.log_transaction(Transaction::TransferIn, amount, note_in);

        log::debug!("Transferred {amount} from {} to itself", self.name);

        return Ok(());
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owned copy of the history, oldest first
    pub fn transaction_history(&self) -> Vec<Transaction> {
        self.history.clone()
    }

    pub fn transaction_count(&self) -> usize {
        self.history.len()
    }

    fn log_transaction(
        &mut self,
        kind: fn(TransactionData) -> Transaction,
        amount: Money,
        note: String,
    ) {
        self.history.push(kind(TransactionData {
            amount,
            balance_after: self.balance,
            note,
        }));
    }

    fn require_not_frozen(&self) -> AccountResult {
        if self.frozen {
            Err(AccountError::InvalidOperation(format!(
                "Account {} is frozen",
                self.name
            )))?;
        }

        return Ok(());
    }

    fn require_funds(&self, amount: Money) -> AccountResult {
        if amount > self.balance {
            Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            })?;
        }

        return Ok(());
    }
}

fn require_positive(amount: Money) -> AccountResult {
    if !amount.is_positive() {
        Err(AccountError::InvalidAmount(amount))?;
    }

    return Ok(());
}
