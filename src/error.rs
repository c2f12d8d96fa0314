use rust_decimal::Decimal;
use thiserror::Error;

/// Why a transfer was refused. No balance is touched in any of these cases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("transfer amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    #[error("no client with passport {0:?}")]
    UnknownClient(String),

    #[error("client {passport:?} has no account {requisite:?}")]
    UnknownAccount { passport: String, requisite: String },

    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("crediting {amount} would overflow balance {balance}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },
}

/// A command record from the input file that cannot be applied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{command} command is missing the {field} field")]
    MissingField {
        command: &'static str,
        field: &'static str,
    },
}
