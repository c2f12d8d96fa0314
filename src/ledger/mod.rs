pub mod ledger;
pub mod shared;

pub use ledger::Ledger;
pub use shared::SharedLedger;
