//! In-memory project store for service tests.

mod store;

pub use store::InMemoryProjectStore;
