//! Unit tests for the history ledger.

mod domain_tests;
