pub mod orchestrator;
pub mod ledger;
pub mod accounts;
pub mod clients;
pub mod commands;
pub mod error;

pub use orchestrator::{run, process};
pub use ledger::{Ledger, SharedLedger};
pub use accounts::Account;
pub use clients::Client;
pub use commands::{Command, CommandRecord};
pub use error::{CommandError, TransferError};
