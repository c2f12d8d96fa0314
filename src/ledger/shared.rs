use std::sync::{Arc, Mutex, MutexGuard};
use rust_decimal::Decimal;

use crate::accounts::Account;
use crate::clients::Client;
use crate::error::TransferError;
use crate::ledger::Ledger;

/// A [`Ledger`] that can be handed to several threads.
///
/// Every call takes the single lock for its whole duration, so a transfer's
/// balance check and both balance updates happen under one acquisition.
/// Queries return owned copies since the lock is released on return.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    // Operations never leave the ledger half-updated, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run `f` with exclusive access to the ledger.
    pub fn with<R>(&self, f: impl FnOnce(&mut Ledger) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn add_user(&self, client: Client) {
        self.lock().add_user(client);
    }

    pub fn delete_user(&self, client: &Client) {
        self.lock().delete_user(client);
    }

    pub fn get_users(&self) -> Vec<Client> {
        self.lock().get_users().into_iter().cloned().collect()
    }

    pub fn find_user_by_passport(&self, passport: &str) -> Option<Client> {
        self.lock().find_user_by_passport(passport).cloned()
    }

    pub fn add_account_to_user(&self, passport: &str, account: Account) {
        self.lock().add_account_to_user(passport, account);
    }

    pub fn delete_account_from_user(&self, passport: &str, account: &Account) {
        self.lock().delete_account_from_user(passport, account);
    }

    pub fn get_user_accounts(&self, passport: &str) -> Option<Vec<Account>> {
        self.lock().get_user_accounts(passport).map(<[Account]>::to_vec)
    }

    pub fn transfer_money(
        &self,
        src_passport: &str,
        src_requisite: &str,
        dest_passport: &str,
        dest_requisite: &str,
        amount: Decimal,
    ) -> bool {
        self.lock()
            .transfer_money(src_passport, src_requisite, dest_passport, dest_requisite, amount)
    }

    pub fn try_transfer_money(
        &self,
        src_passport: &str,
        src_requisite: &str,
        dest_passport: &str,
        dest_requisite: &str,
        amount: Decimal,
    ) -> Result<(), TransferError> {
        self.lock()
            .try_transfer_money(src_passport, src_requisite, dest_passport, dest_requisite, amount)
    }
}

impl From<Ledger> for SharedLedger {
    fn from(ledger: Ledger) -> Self {
        Self::new(ledger)
    }
}
