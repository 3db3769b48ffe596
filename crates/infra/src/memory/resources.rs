use std::collections::BTreeMap;
use std::sync::RwLock;

use authserver_core::{CategoryId, EventId, UserId};
use authserver_events::{Category, CategoryStore, Event, EventDraft, EventStore};

#[derive(Debug, Default)]
struct EventState {
    next_id: i64,
    events: BTreeMap<EventId, Event>,
}

/// In-memory Resource Store for events.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    state: RwLock<EventState>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventStore for InMemoryEventStore {
    fn find_by_id(&self, id: EventId) -> Option<Event> {
        let state = match self.state.read() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state.events.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Event> {
        let state = match self.state.read() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state.events.values().cloned().collect()
    }

    fn find_all_sorted_by_name(&self) -> Vec<Event> {
        let mut all = self.find_all();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    fn find_by_creator(&self, creator_id: UserId) -> Vec<Event> {
        self.find_all()
            .into_iter()
            .filter(|e| e.creator_id == creator_id)
            .collect()
    }

    fn find_by_category(&self, category_id: CategoryId) -> Vec<Event> {
        self.find_all()
            .into_iter()
            .filter(|e| e.category_id == category_id)
            .collect()
    }

    fn create(&self, draft: EventDraft) -> Event {
        let mut state = match self.state.write() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state.next_id += 1;
        let event = Event {
            id: EventId::new(state.next_id),
            name: draft.name,
            location: draft.location,
            hour: draft.hour,
            description: draft.description,
            creator_id: draft.creator_id,
            category_id: draft.category_id,
        };
        state.events.insert(event.id, event.clone());
        event
    }

    fn update(&self, event: &Event) -> bool {
        let mut state = match self.state.write() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        match state.events.get_mut(&event.id) {
            Some(slot) => {
                *slot = event.clone();
                true
            }
            None => false,
        }
    }

    fn delete(&self, id: EventId) -> bool {
        let mut state = match self.state.write() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state.events.remove(&id).is_some()
    }
}

#[derive(Debug, Default)]
struct CategoryState {
    next_id: i64,
    categories: BTreeMap<CategoryId, Category>,
}

/// In-memory Resource Store for categories.
#[derive(Debug, Default)]
pub struct InMemoryCategoryStore {
    state: RwLock<CategoryState>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryStore for InMemoryCategoryStore {
    fn find_by_id(&self, id: CategoryId) -> Option<Category> {
        let state = match self.state.read() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state.categories.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Category> {
        let state = match self.state.read() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state.categories.values().cloned().collect()
    }

    fn create(&self, name: String) -> Category {
        let mut state = match self.state.write() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state.next_id += 1;
        let category = Category {
            id: CategoryId::new(state.next_id),
            name,
        };
        state.categories.insert(category.id, category.clone());
        category
    }

    fn delete(&self, id: CategoryId) -> bool {
        let mut state = match self.state.write() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state.categories.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(creator: i64, category: i64, name: &str) -> EventDraft {
        EventDraft {
            name: name.to_string(),
            location: "somewhere".to_string(),
            hour: "18:00".to_string(),
            description: String::new(),
            creator_id: UserId::new(creator),
            category_id: CategoryId::new(category),
        }
    }

    #[test]
    fn event_ids_are_monotonic_and_not_reused() {
        let store = InMemoryEventStore::new();
        let a = store.create(draft(1, 1, "a"));
        assert!(store.delete(a.id));
        let b = store.create(draft(1, 1, "b"));
        assert!(b.id > a.id);
    }

    #[test]
    fn update_replaces_in_place() {
        let store = InMemoryEventStore::new();
        let mut event = store.create(draft(1, 1, "before"));
        event.name = "after".to_string();
        assert!(store.update(&event));
        assert_eq!(store.find_by_id(event.id).unwrap().name, "after");
    }

    #[test]
    fn update_of_unknown_event_is_false() {
        let store = InMemoryEventStore::new();
        let ghost = Event {
            id: EventId::new(42),
            name: String::new(),
            location: String::new(),
            hour: String::new(),
            description: String::new(),
            creator_id: UserId::new(1),
            category_id: CategoryId::new(1),
        };
        assert!(!store.update(&ghost));
    }

    #[test]
    fn filters_by_creator_and_category() {
        let store = InMemoryEventStore::new();
        store.create(draft(1, 10, "a"));
        store.create(draft(2, 10, "b"));
        store.create(draft(1, 20, "c"));

        assert_eq!(store.find_by_creator(UserId::new(1)).len(), 2);
        assert_eq!(store.find_by_category(CategoryId::new(10)).len(), 2);
    }

    #[test]
    fn categories_get_their_own_sequence() {
        let categories = InMemoryCategoryStore::new();
        let music = categories.create("Music".to_string());
        let sport = categories.create("Sport".to_string());
        assert_eq!(music.id, CategoryId::new(1));
        assert_eq!(sport.id, CategoryId::new(2));
        assert!(categories.delete(music.id));
        assert!(!categories.delete(music.id));
    }
}
