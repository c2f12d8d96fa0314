use std::collections::HashMap;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::accounts::Account;
use crate::clients::Client;
use crate::error::TransferError;

#[derive(Debug)]
struct ClientEntry {
    client: Client,
    accounts: Vec<Account>,
}

/// In-memory registry of clients and their accounts.
///
/// Clients are keyed by passport. Every balance change goes through
/// [`Ledger::transfer_money`].
#[derive(Debug, Default)]
pub struct Ledger {
    clients: HashMap<String, ClientEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            clients: HashMap::new(),
        }
    }

    /// Register a client with an empty account list.
    ///
    /// Re-adding a passport that is already registered drops its accounts.
    pub fn add_user(&mut self, client: Client) {
        let passport = client.passport().to_string();
        let previous = self.clients.insert(
            passport,
            ClientEntry {
                client,
                accounts: Vec::new(),
            },
        );

        if let Some(previous) = previous {
            warn!(
                "client {} re-registered, {} account(s) dropped",
                previous.client.passport(),
                previous.accounts.len()
            );
        }
    }

    /// Remove the client together with all of its accounts.
    pub fn delete_user(&mut self, client: &Client) {
        if self.clients.remove(client.passport()).is_some() {
            debug!("client {} removed", client.passport());
        }
    }

    /// All registered clients, ordered by name then passport.
    pub fn get_users(&self) -> Vec<&Client> {
        let mut users: Vec<&Client> = self.clients.values().map(|entry| &entry.client).collect();
        users.sort_by(|a, b| {
            a.name()
                .cmp(b.name())
                .then_with(|| a.passport().cmp(b.passport()))
        });
        users
    }

    pub fn find_user_by_passport(&self, passport: &str) -> Option<&Client> {
        self.clients.get(passport).map(|entry| &entry.client)
    }

    /// Attach an account to the client. Unknown passports and duplicate
    /// requisites are ignored.
    pub fn add_account_to_user(&mut self, passport: &str, account: Account) {
        let Some(entry) = self.clients.get_mut(passport) else {
            debug!("add account {}: no client {}", account.requisite(), passport);
            return;
        };

        if !entry.accounts.contains(&account) {
            entry.accounts.push(account);
        }
    }

    pub fn delete_account_from_user(&mut self, passport: &str, account: &Account) {
        if let Some(entry) = self.clients.get_mut(passport) {
            if let Some(index) = entry.accounts.iter().position(|acc| acc == account) {
                entry.accounts.remove(index);
            }
        }
    }

    /// Accounts of the client in insertion order.
    ///
    /// `None` means the passport is unknown, `Some(&[])` a client without accounts.
    pub fn get_user_accounts(&self, passport: &str) -> Option<&[Account]> {
        self.clients.get(passport).map(|entry| entry.accounts.as_slice())
    }

    pub fn find_account(&self, passport: &str, requisite: &str) -> Option<&Account> {
        self.get_user_accounts(passport)?
            .iter()
            .find(|acc| acc.requisite() == requisite)
    }

    /// Move `amount` between two accounts. Returns `false` without touching
    /// any balance if the transfer is refused.
    pub fn transfer_money(
        &mut self,
        src_passport: &str,
        src_requisite: &str,
        dest_passport: &str,
        dest_requisite: &str,
        amount: Decimal,
    ) -> bool {
        match self.try_transfer_money(src_passport, src_requisite, dest_passport, dest_requisite, amount) {
            Ok(()) => true,
            Err(e) => {
                debug!(
                    "transfer {}/{} -> {}/{} of {} refused: {}",
                    src_passport, src_requisite, dest_passport, dest_requisite, amount, e
                );
                false
            }
        }
    }

    /// Same as [`Ledger::transfer_money`], reporting why a transfer was refused.
    pub fn try_transfer_money(
        &mut self,
        src_passport: &str,
        src_requisite: &str,
        dest_passport: &str,
        dest_requisite: &str,
        amount: Decimal,
    ) -> Result<(), TransferError> {
        if amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount(amount));
        }

        // Resolve and validate everything before the first mutation
        self.resolve_client(src_passport)?;
        self.resolve_client(dest_passport)?;
        let src_balance = self.resolve_account(src_passport, src_requisite)?.balance();
        let dest_balance = self.resolve_account(dest_passport, dest_requisite)?.balance();

        if amount > src_balance {
            return Err(TransferError::InsufficientFunds {
                balance: src_balance,
                requested: amount,
            });
        }

        // Debit and credit cancel out on the same account
        if src_passport == dest_passport && src_requisite == dest_requisite {
            return Ok(());
        }

        if dest_balance.checked_add(amount).is_none() {
            return Err(TransferError::BalanceOverflow {
                balance: dest_balance,
                amount,
            });
        }

        self.resolve_account_mut(src_passport, src_requisite)?
            .withdraw(amount);
        self.resolve_account_mut(dest_passport, dest_requisite)?
            .deposit(amount);

        debug!(
            "transferred {} from {}/{} to {}/{}",
            amount, src_passport, src_requisite, dest_passport, dest_requisite
        );
        Ok(())
    }

    fn resolve_client(&self, passport: &str) -> Result<&ClientEntry, TransferError> {
        self.clients
            .get(passport)
            .ok_or_else(|| TransferError::UnknownClient(passport.to_string()))
    }

    fn resolve_account(&self, passport: &str, requisite: &str) -> Result<&Account, TransferError> {
        self.resolve_client(passport)?
            .accounts
            .iter()
            .find(|acc| acc.requisite() == requisite)
            .ok_or_else(|| unknown_account(passport, requisite))
    }

    fn resolve_account_mut(&mut self, passport: &str, requisite: &str) -> Result<&mut Account, TransferError> {
        self.clients
            .get_mut(passport)
            .ok_or_else(|| TransferError::UnknownClient(passport.to_string()))?
            .accounts
            .iter_mut()
            .find(|acc| acc.requisite() == requisite)
            .ok_or_else(|| unknown_account(passport, requisite))
    }
}

fn unknown_account(passport: &str, requisite: &str) -> TransferError {
    TransferError::UnknownAccount {
        passport: passport.to_string(),
        requisite: requisite.to_string(),
    }
}
