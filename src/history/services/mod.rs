//! History ledger and log retention services.

mod ledger;
mod retention;

pub use ledger::{HistoryLedger, HistoryLedgerError, HistoryLedgerResult};
pub use retention::LogRetentionService;
