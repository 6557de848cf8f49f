//! History domain types.

mod entry;
mod log;
mod review;
mod settings;

pub use entry::{HistoryAction, HistoryEntry, ParseHistoryActionError};
pub use log::{CompactionReport, HistoryLog, HistorySummary};
pub use review::{ReviewRecord, ReviewVerdict};
pub use settings::LedgerSettings;
