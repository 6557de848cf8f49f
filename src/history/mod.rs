//! Activity history: an append-only ledger with compaction and archival.
//!
//! Every task transition is recorded as a [`domain::HistoryEntry`] in the
//! live log. When the live log grows past its threshold the oldest entries
//! move into a dated archive file. Review records and other log files sit
//! beside the live log until the retention sweep moves them away.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Ledger and retention services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
