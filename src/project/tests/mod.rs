//! Unit tests for project configuration and stores.
