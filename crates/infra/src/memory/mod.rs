//! In-memory stores for tests/dev. Not optimized for performance.
//!
//! All of them follow the same shape: one `RwLock` over the whole state so
//! every trait call is atomic, and a monotonically increasing id sequence
//! that survives deletes (ids are never reused). A poisoned lock is
//! recovered via `into_inner` on every path; state is mutated only while
//! already consistent, so the data under a poisoned lock is still valid.

mod directory;
mod resources;

pub use directory::InMemoryUserDirectory;
pub use resources::{InMemoryCategoryStore, InMemoryEventStore};
