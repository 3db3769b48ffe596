//! `authserver-infra` — storage implementations behind the directory and
//! resource store interfaces.
//!
//! Only the in-memory variants exist today (dev/test); a database-backed
//! directory would implement the same traits.

pub mod memory;

pub use memory::{InMemoryCategoryStore, InMemoryEventStore, InMemoryUserDirectory};
