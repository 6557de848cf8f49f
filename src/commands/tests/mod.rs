//! Command handler tests over in-memory adapters.

mod flow_tests;
mod support;
