use crate::account::AccountResult;
use crate::{Account, AccountReport, HistoryReport, Money};

use std::collections::HashMap;

/// Convenience structure for looking up accounts by name
#[derive(Debug, Default)]
pub struct Accounts {
    map: HashMap<String, Account>,
}

impl Accounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<&Account> {
        self.map.get(name)
    }

    pub fn find_mut_or_create(&mut self, name: &str) -> &mut Account {
        return self.map.entry(name.to_string()).or_insert_with(|| {
            log::debug!("Opening account: {name}");
            Account::new(name)
        });
    }

    /// Transfers between two named accounts, opening either one if needed.
    /// A transfer from an account to itself is routed to `Account::transfer_to_self`.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Money) -> AccountResult {
        if from == to {
            return self.find_mut_or_create(from).transfer_to_self(amount);
        }

        // Take the source out so both accounts can be borrowed mutably at once
        let mut source = self.map.remove(from).unwrap_or_else(|| {
            log::debug!("Opening account: {from}");
            Account::new(from)
        });
        let res = source.transfer(self.find_mut_or_create(to), amount);
        self.map.insert(from.to_string(), source);

        return res;
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn sorted(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.map.values().collect();
        accounts.sort_by(|a, b| a.name().cmp(b.name()));
        accounts
    }

    pub fn build_report(&self) -> Vec<AccountReport> {
        return self
            .sorted()
            .into_iter()
            .map(|account| AccountReport {
                name: account.name().to_string(),
                balance: account.balance().to_string(),
                frozen: account.is_frozen(),
                transactions: account.transaction_count(),
            })
            .collect();
    }

    pub fn build_history_report(&self) -> Vec<HistoryReport> {
        return self
            .sorted()
            .into_iter()
            .flat_map(|account| {
                account
                    .transaction_history()
                    .into_iter()
                    .map(move |tx| HistoryReport {
                        name: account.name().to_string(),
                        typ: tx.kind().to_string(),
                        amount: tx.amount.to_string(),
                        balance_after: tx.balance_after.to_string(),
                        note: tx.note.clone(),
                    })
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccountError;

    const SOME_NAME: &str = "alice";
    const OTHER_NAME: &str = "bob";

    #[test]
    fn find_mut_or_create() {
        let mut accounts = Accounts::new();
        assert!(accounts.is_empty());

        accounts.find_mut_or_create(SOME_NAME).deposit(Money(500)).unwrap();
        accounts.find_mut_or_create(SOME_NAME).deposit(Money(500)).unwrap();

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts.find(SOME_NAME).unwrap().balance(), Money(1000));
        assert!(accounts.find(OTHER_NAME).is_none());
    }

    #[test]
    fn transfer_opens_target() {
        let mut accounts = Accounts::new();
        accounts.find_mut_or_create(SOME_NAME).deposit(Money(5000)).unwrap();

        accounts.transfer(SOME_NAME, OTHER_NAME, Money(2000)).unwrap();

        assert_eq!(accounts.find(SOME_NAME).unwrap().balance(), Money(3000));
        assert_eq!(accounts.find(OTHER_NAME).unwrap().balance(), Money(2000));
    }

    #[test]
    fn failed_transfer_keeps_source() {
        let mut accounts = Accounts::new();
        accounts.find_mut_or_create(SOME_NAME).deposit(Money(100)).unwrap();
        accounts.find_mut_or_create(OTHER_NAME).freeze();

        assert!(matches!(
            accounts.transfer(SOME_NAME, OTHER_NAME, Money(50)),
            Err(AccountError::InvalidOperation(_))
        ));

        let source = accounts.find(SOME_NAME).unwrap();
        assert_eq!(source.balance(), Money(100));
        assert_eq!(source.transaction_count(), 1);
        assert_eq!(accounts.len(), 2);
    }

    #[test]
    fn transfer_to_same_name() {
        let mut accounts = Accounts::new();
        accounts.find_mut_or_create(SOME_NAME).deposit(Money(100)).unwrap();

        accounts.transfer(SOME_NAME, SOME_NAME, Money(40)).unwrap();

        let account = accounts.find(SOME_NAME).unwrap();
        assert_eq!(account.balance(), Money(100));
        assert_eq!(account.transaction_count(), 3);
    }

    #[test]
    fn build_report() {
        let mut accounts = Accounts::new();
        accounts.find_mut_or_create(OTHER_NAME).freeze();
        accounts.find_mut_or_create(SOME_NAME).deposit(Money(1250)).unwrap();

        assert_eq!(
            accounts.build_report(),
            vec![
                AccountReport {
                    name: SOME_NAME.to_string(),
                    balance: "12.50".to_string(),
                    frozen: false,
                    transactions: 1,
                },
                AccountReport {
                    name: OTHER_NAME.to_string(),
                    balance: "0.00".to_string(),
                    frozen: true,
                    transactions: 0,
                },
            ]
        );
    }

    #[test]
    fn build_history_report() {
        let mut accounts = Accounts::new();
        accounts.find_mut_or_create(SOME_NAME).deposit(Money(1000)).unwrap();
        accounts.transfer(SOME_NAME, OTHER_NAME, Money(250)).unwrap();

        let history = accounts.build_history_report();

        let rows: Vec<(&str, &str, &str, &str)> = history
            .iter()
            .map(|r| {
                (
                    r.name.as_str(),
                    r.typ.as_str(),
                    r.amount.as_str(),
                    r.balance_after.as_str(),
                )
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                ("alice", "deposit", "10.00", "10.00"),
                ("alice", "transfer_out", "2.50", "7.50"),
                ("bob", "transfer_in", "2.50", "2.50"),
            ]
        );
        assert_eq!(history[1].note, "Transferred to bob");
        assert_eq!(history[2].note, "Received from alice");
    }
}
