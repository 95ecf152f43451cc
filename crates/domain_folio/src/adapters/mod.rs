//! Folio Store Adapters
//!
//! - **InMemoryFolioStore**: process-local store for tests and demos

pub mod in_memory;

pub use in_memory::InMemoryFolioStore;
