//! Resource Store interfaces for events and categories.
//!
//! Same in-process contract as the User Directory: owned snapshots out,
//! internally serialized writes, ids assigned on create and never reused.

use authserver_core::{CategoryId, EventId, UserId};

use crate::category::Category;
use crate::event::{Event, EventDraft};

pub trait EventStore: Send + Sync {
    fn find_by_id(&self, id: EventId) -> Option<Event>;

    /// Insertion order.
    fn find_all(&self) -> Vec<Event>;

    /// Sorted by event name.
    fn find_all_sorted_by_name(&self) -> Vec<Event>;

    fn find_by_creator(&self, creator_id: UserId) -> Vec<Event>;

    fn find_by_category(&self, category_id: CategoryId) -> Vec<Event>;

    /// Persist a new event, assigning the next id.
    fn create(&self, draft: EventDraft) -> Event;

    /// Replace an existing event. Returns `false` for an unknown id.
    fn update(&self, event: &Event) -> bool;

    /// Remove an event. Returns `true` if it existed.
    fn delete(&self, id: EventId) -> bool;
}

pub trait CategoryStore: Send + Sync {
    fn find_by_id(&self, id: CategoryId) -> Option<Category>;

    fn find_all(&self) -> Vec<Category>;

    /// Persist a new category, assigning the next id.
    fn create(&self, name: String) -> Category;

    /// Remove a category. Returns `true` if it existed.
    fn delete(&self, id: CategoryId) -> bool;
}
