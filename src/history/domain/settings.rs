//! Ledger thresholds.

/// Compaction and retention limits for the history ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSettings {
    auto_compact_threshold: usize,
    keep_recent: usize,
    log_retention_days: u32,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            auto_compact_threshold: 100,
            keep_recent: 50,
            log_retention_days: 30,
        }
    }
}

impl LedgerSettings {
    /// Sets the live-log length above which an append triggers compaction.
    #[must_use]
    pub const fn with_auto_compact_threshold(mut self, threshold: usize) -> Self {
        self.auto_compact_threshold = threshold;
        self
    }

    /// Sets how many recent entries compaction keeps live.
    #[must_use]
    pub const fn with_keep_recent(mut self, keep_recent: usize) -> Self {
        self.keep_recent = keep_recent;
        self
    }

    /// Sets how many days log files stay in place before being swept.
    #[must_use]
    pub const fn with_log_retention_days(mut self, days: u32) -> Self {
        self.log_retention_days = days;
        self
    }

    /// Returns the auto-compaction threshold.
    #[must_use]
    pub const fn auto_compact_threshold(&self) -> usize {
        self.auto_compact_threshold
    }

    /// Returns the number of entries kept live by compaction.
    #[must_use]
    pub const fn keep_recent(&self) -> usize {
        self.keep_recent
    }

    /// Returns the log file retention window in days.
    #[must_use]
    pub const fn log_retention_days(&self) -> u32 {
        self.log_retention_days
    }
}
