//! Leave balance collection.
//!
//! Balances are keyed by employee number rather than a storage identifier,
//! so they get their own small repository instead of a [`super::Collection`].

use tracing::debug;

use crate::error::Result;
use crate::fixtures;
use crate::models::LeaveBalance;
use crate::storage::{keys, Store};

/// Repository of per-employee leave balances.
#[derive(Debug, Clone, Copy)]
pub struct LeaveBalanceRepository<'a> {
    store: &'a Store,
}

impl<'a> LeaveBalanceRepository<'a> {
    /// Create a repository over `store`.
    #[must_use]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Every balance, or the demo balances if none have been persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database read fails or the stored document
    /// is malformed.
    pub fn all(&self) -> Result<Vec<LeaveBalance>> {
        Ok(self
            .store
            .load(keys::LEAVE_BALANCES)?
            .unwrap_or_else(fixtures::leave_balances))
    }

    /// Balance for the employee with number `employee_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read.
    pub fn balance_for(&self, employee_id: &str) -> Result<Option<LeaveBalance>> {
        Ok(self
            .all()?
            .into_iter()
            .find(|balance| balance.employee_id == employee_id))
    }

    /// Insert or replace the balance for `balance.employee_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written.
    pub fn upsert(&self, balance: LeaveBalance) -> Result<()> {
        let mut balances = self.all()?;
        match balances
            .iter_mut()
            .find(|existing| existing.employee_id == balance.employee_id)
        {
            Some(existing) => *existing = balance,
            None => balances.push(balance),
        }
        self.store.save(keys::LEAVE_BALANCES, &balances)?;
        debug!("Saved leave balances ({} employees)", balances.len());
        Ok(())
    }

    /// Overwrite the stored balances.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn replace_all(&self, balances: &[LeaveBalance]) -> Result<()> {
        self.store.save(keys::LEAVE_BALANCES, balances)
    }

    /// Drop the stored balances so reads fall back to the demo balances.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn clear(&self) -> Result<bool> {
        self.store.remove(keys::LEAVE_BALANCES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaveType;

    #[test]
    fn test_balance_for() {
        let store = Store::open_in_memory().unwrap();
        let repo = LeaveBalanceRepository::new(&store);

        let balance = repo.balance_for("EMP003").unwrap().unwrap();
        assert_eq!(balance.available(LeaveType::Maternity), 12);
        assert!(repo.balance_for("HR001").unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_and_appends() {
        let store = Store::open_in_memory().unwrap();
        let repo = LeaveBalanceRepository::new(&store);

        let mut balance = repo.balance_for("EMP001").unwrap().unwrap();
        balance.vacation = 11;
        repo.upsert(balance).unwrap();
        repo.upsert(LeaveBalance {
            employee_id: "HR001".to_string(),
            vacation: 25,
            ..LeaveBalance::default()
        })
        .unwrap();

        let all = repo.all().unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(repo.balance_for("EMP001").unwrap().unwrap().vacation, 11);
        assert_eq!(repo.balance_for("HR001").unwrap().unwrap().vacation, 25);
    }

    #[test]
    fn test_clear() {
        let store = Store::open_in_memory().unwrap();
        let repo = LeaveBalanceRepository::new(&store);
        repo.replace_all(&[]).unwrap();
        assert!(repo.all().unwrap().is_empty());

        assert!(repo.clear().unwrap());
        assert_eq!(repo.all().unwrap().len(), 4);
    }
}
