use crate::{Accounts, Money, Result};

use serde::Deserialize;

use thiserror::Error;

/// Represents an input row that a CSV record would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct InputRecord {
    #[serde(rename = "type")]
    pub typ: InputRecordType,

    pub account: String,
    pub target: Option<String>,
    pub amount: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputRecordType {
    Deposit,
    Withdraw,
    Transfer,
    Freeze,
    Unfreeze,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input record: amount value missing from {0:?}: {1:?}")]
    NoAmount(InputRecordType, InputRecord),

    #[error("Error parsing input record: target account missing from transfer: {0:?}")]
    NoTarget(InputRecord),
}

/// Typed command, one per input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Deposit { account: String, amount: Money },
    Withdraw { account: String, amount: Money },
    Transfer { from: String, to: String, amount: Money },
    Freeze { account: String },
    Unfreeze { account: String },
}

impl InputRecord {
    pub fn parse_command(self) -> Result<Command> {
        let command = match self.typ {
            InputRecordType::Deposit => Command::Deposit {
                amount: self.parse_amount()?,
                account: self.account,
            },
            InputRecordType::Withdraw => Command::Withdraw {
                amount: self.parse_amount()?,
                account: self.account,
            },
            InputRecordType::Transfer => {
                let amount = self.parse_amount()?;
                let to = self
                    .target
                    .clone()
                    .filter(|target| !target.is_empty())
                    .ok_or_else(|| InputParseError::NoTarget(self.clone()))?;

                Command::Transfer {
                    from: self.account,
                    to,
                    amount,
                }
            }
            InputRecordType::Freeze => Command::Freeze {
                account: self.account,
            },
            InputRecordType::Unfreeze => Command::Unfreeze {
                account: self.account,
            },
        };

        Ok(command)
    }

    fn parse_amount(&self) -> Result<Money> {
        let amount = self
            .amount
            .as_deref()
            .filter(|amount| !amount.is_empty())
            .ok_or_else(|| InputParseError::NoAmount(self.typ, self.clone()))?;

        return Ok(Money::parse(amount)?);
    }
}

impl Command {
    /// Applies the command to the named account(s), opening them on first use
    pub fn apply(self, accounts: &mut Accounts) -> Result {
        log::debug!("Applying command: {self:?}");

        match self {
            Command::Deposit { account, amount } => {
                accounts.find_mut_or_create(&account).deposit(amount)?
            }
            Command::Withdraw { account, amount } => {
                accounts.find_mut_or_create(&account).withdraw(amount)?
            }
            Command::Transfer { from, to, amount } => accounts.transfer(&from, &to, amount)?,
            Command::Freeze { account } => accounts.find_mut_or_create(&account).freeze(),
            Command::Unfreeze { account } => accounts.find_mut_or_create(&account).unfreeze(),
        }

        return Ok(());
    }
}
