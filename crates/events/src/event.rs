//! The event record.

use serde::{Deserialize, Serialize};

use authserver_core::{CategoryId, EventId, UserId};

/// A scheduled event, owned by its creator and filed under a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub location: String,
    pub hour: String,
    pub description: String,
    pub creator_id: UserId,
    pub category_id: CategoryId,
}

/// Event fields as submitted by a caller (no id yet, referents unchecked).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub name: String,
    pub location: String,
    pub hour: String,
    pub description: String,
    pub creator_id: UserId,
    pub category_id: CategoryId,
}
