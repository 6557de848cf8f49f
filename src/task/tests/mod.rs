//! Unit tests for task breakdown, scheduling, and lifecycle services.

mod resolver_tests;
