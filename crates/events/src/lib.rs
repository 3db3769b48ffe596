//! `authserver-events` — events and categories (the Resource Store side).
//!
//! Events and categories are plain domain records owned by an external
//! store; the design content here is the mutation rules that combine the
//! authenticated [`authserver_auth::Identity`] with ownership and role
//! checks.

pub mod category;
pub mod event;
pub mod service;
pub mod store;

pub use category::Category;
pub use event::{Event, EventDraft};
pub use service::EventsService;
pub use store::{CategoryStore, EventStore};
