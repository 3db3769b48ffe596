//! Event/category operations combining ownership and role checks.

use std::sync::Arc;

use authserver_auth::{Identity, PrincipalSource, Role, guard};
use authserver_core::{AuthError, CategoryId, EventId, UserId};

use crate::category::Category;
use crate::event::{Event, EventDraft};
use crate::store::{CategoryStore, EventStore};

/// Operations over events and categories.
///
/// Callers authenticate first; mutations take the resolved [`Identity`]
/// explicitly. Referential checks (creator, category) go through the same
/// principal seam the authenticator uses, so a user deleted mid-flight
/// fails the whole operation instead of leaving a dangling reference.
pub struct EventsService {
    events: Arc<dyn EventStore>,
    categories: Arc<dyn CategoryStore>,
    principals: Arc<dyn PrincipalSource>,
}

impl EventsService {
    pub fn new(
        events: Arc<dyn EventStore>,
        categories: Arc<dyn CategoryStore>,
        principals: Arc<dyn PrincipalSource>,
    ) -> Self {
        Self {
            events,
            categories,
            principals,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────────────

    pub fn get_event(&self, id: EventId) -> Option<Event> {
        self.events.find_by_id(id)
    }

    pub fn list_events(&self) -> Vec<Event> {
        self.events.find_all()
    }

    pub fn list_events_sorted_by_name(&self) -> Vec<Event> {
        self.events.find_all_sorted_by_name()
    }

    pub fn list_events_by_category(&self, category_id: CategoryId) -> Vec<Event> {
        self.events.find_by_category(category_id)
    }

    /// Events created by `creator_id`. The user must exist.
    pub fn list_events_by_creator(&self, creator_id: UserId) -> Result<Vec<Event>, AuthError> {
        self.ensure_user_exists(creator_id)?;
        Ok(self.events.find_by_creator(creator_id))
    }

    /// Create an event. Both referents must exist at creation time.
    pub fn create_event(&self, draft: EventDraft) -> Result<Event, AuthError> {
        self.ensure_user_exists(draft.creator_id)?;
        self.ensure_category_exists(draft.category_id)?;
        Ok(self.events.create(draft))
    }

    /// Update an event. Only the event's creator may update it.
    pub fn update_event(
        &self,
        identity: &Identity,
        id: EventId,
        draft: EventDraft,
    ) -> Result<Event, AuthError> {
        let existing = self.events.find_by_id(id).ok_or(AuthError::NotFound)?;

        if identity.id != existing.creator_id {
            return Err(AuthError::Forbidden);
        }

        self.ensure_user_exists(draft.creator_id)?;
        self.ensure_category_exists(draft.category_id)?;

        let updated = Event {
            id: existing.id,
            name: draft.name,
            location: draft.location,
            hour: draft.hour,
            description: draft.description,
            creator_id: draft.creator_id,
            category_id: draft.category_id,
        };

        if !self.events.update(&updated) {
            // Vanished between lookup and write; fail the whole operation.
            return Err(AuthError::NotFound);
        }
        Ok(updated)
    }

    /// Delete an event. Requires the identity to be the creator *and* to
    /// hold `ADMIN`; an event created by a plain user is undeletable until
    /// its creator is granted the role.
    pub fn delete_event(&self, identity: &Identity, id: EventId) -> Result<(), AuthError> {
        let event = self.events.find_by_id(id).ok_or(AuthError::NotFound)?;

        if identity.id != event.creator_id || !guard::has_role(identity, &Role::admin()) {
            return Err(AuthError::Forbidden);
        }

        self.events.delete(id);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Categories
    // ─────────────────────────────────────────────────────────────────────

    pub fn get_category(&self, id: CategoryId) -> Option<Category> {
        self.categories.find_by_id(id)
    }

    pub fn list_categories(&self) -> Vec<Category> {
        self.categories.find_all()
    }

    /// Create a category. Admin-only.
    pub fn create_category(&self, identity: &Identity, name: &str) -> Result<Category, AuthError> {
        guard::require_role(identity, &Role::admin())?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::validation("category name cannot be empty"));
        }

        Ok(self.categories.create(name.to_string()))
    }

    /// Delete a category and the events filed under it. Admin-only.
    pub fn delete_category(&self, identity: &Identity, id: CategoryId) -> Result<(), AuthError> {
        guard::require_role(identity, &Role::admin())?;

        if self.categories.find_by_id(id).is_none() {
            return Err(AuthError::NotFound);
        }

        // Orphan removal: events cannot outlive their category.
        for event in self.events.find_by_category(id) {
            self.events.delete(event.id);
        }
        self.categories.delete(id);
        Ok(())
    }

    fn ensure_user_exists(&self, id: UserId) -> Result<(), AuthError> {
        match self.principals.identity_by_id(id) {
            Some(_) => Ok(()),
            None => Err(AuthError::NotFound),
        }
    }

    fn ensure_category_exists(&self, id: CategoryId) -> Result<(), AuthError> {
        match self.categories.find_by_id(id) {
            Some(_) => Ok(()),
            None => Err(AuthError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use authserver_auth::{Credentials, RoleSet};

    use super::*;

    #[derive(Default)]
    struct StubEvents {
        state: RwLock<(i64, HashMap<EventId, Event>)>,
    }

    impl EventStore for StubEvents {
        fn find_by_id(&self, id: EventId) -> Option<Event> {
            self.state.read().unwrap().1.get(&id).cloned()
        }

        fn find_all(&self) -> Vec<Event> {
            let mut all: Vec<Event> = self.state.read().unwrap().1.values().cloned().collect();
            all.sort_by_key(|e| e.id);
            all
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
            let mut state = self.state.write().unwrap();
            state.0 += 1;
            let event = Event {
                id: EventId::new(state.0),
                name: draft.name,
                location: draft.location,
                hour: draft.hour,
                description: draft.description,
                creator_id: draft.creator_id,
                category_id: draft.category_id,
            };
            state.1.insert(event.id, event.clone());
            event
        }

        fn update(&self, event: &Event) -> bool {
            let mut state = self.state.write().unwrap();
            match state.1.get_mut(&event.id) {
                Some(slot) => {
                    *slot = event.clone();
                    true
                }
                None => false,
            }
        }

        fn delete(&self, id: EventId) -> bool {
            self.state.write().unwrap().1.remove(&id).is_some()
        }
    }

    #[derive(Default)]
    struct StubCategories {
        state: RwLock<(i64, HashMap<CategoryId, Category>)>,
    }

    impl CategoryStore for StubCategories {
        fn find_by_id(&self, id: CategoryId) -> Option<Category> {
            self.state.read().unwrap().1.get(&id).cloned()
        }

        fn find_all(&self) -> Vec<Category> {
            let mut all: Vec<Category> = self.state.read().unwrap().1.values().cloned().collect();
            all.sort_by_key(|c| c.id);
            all
        }

        fn create(&self, name: String) -> Category {
            let mut state = self.state.write().unwrap();
            state.0 += 1;
            let category = Category {
                id: CategoryId::new(state.0),
                name,
            };
            state.1.insert(category.id, category.clone());
            category
        }

        fn delete(&self, id: CategoryId) -> bool {
            self.state.write().unwrap().1.remove(&id).is_some()
        }
    }

    /// Principals 1 (admin) and 2 (plain user) exist; nobody else does.
    struct StubPrincipals;

    impl PrincipalSource for StubPrincipals {
        fn identity_by_id(&self, id: UserId) -> Option<Identity> {
            match id.get() {
                1 => Some(admin()),
                2 => Some(plain()),
                _ => None,
            }
        }

        fn credentials_by_email(&self, _email: &str) -> Option<Credentials> {
            None
        }
    }

    fn admin() -> Identity {
        Identity::new(
            UserId::new(1),
            "admin",
            [Role::user(), Role::admin()].into_iter().collect::<RoleSet>(),
        )
    }

    fn plain() -> Identity {
        Identity::new(
            UserId::new(2),
            "plain",
            [Role::user()].into_iter().collect::<RoleSet>(),
        )
    }

    fn service() -> EventsService {
        EventsService::new(
            Arc::new(StubEvents::default()),
            Arc::new(StubCategories::default()),
            Arc::new(StubPrincipals),
        )
    }

    fn draft(creator: i64, category: i64) -> EventDraft {
        EventDraft {
            name: "Event Name".to_string(),
            location: "Event Location".to_string(),
            hour: "18:00".to_string(),
            description: "Event Description".to_string(),
            creator_id: UserId::new(creator),
            category_id: CategoryId::new(category),
        }
    }

    #[test]
    fn create_event_requires_existing_referents() {
        let service = service();
        let category = service.create_category(&admin(), "Music").unwrap();

        assert_eq!(
            service.create_event(draft(99, category.id.get())),
            Err(AuthError::NotFound)
        );
        assert_eq!(service.create_event(draft(2, 99)), Err(AuthError::NotFound));

        let event = service.create_event(draft(2, category.id.get())).unwrap();
        assert!(event.id.is_assigned());
        assert_eq!(event.creator_id, UserId::new(2));
    }

    #[test]
    fn update_is_creator_only() {
        let service = service();
        let category = service.create_category(&admin(), "Music").unwrap();
        let event = service.create_event(draft(2, category.id.get())).unwrap();

        // Admin is not the creator, so even ADMIN cannot update.
        let mut changed = draft(2, category.id.get());
        changed.name = "Renamed".to_string();
        assert_eq!(
            service.update_event(&admin(), event.id, changed.clone()),
            Err(AuthError::Forbidden)
        );

        let updated = service.update_event(&plain(), event.id, changed).unwrap();
        assert_eq!(updated.id, event.id);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(service.get_event(event.id).unwrap().name, "Renamed");
    }

    #[test]
    fn update_of_missing_event_is_not_found() {
        let service = service();
        assert_eq!(
            service.update_event(&plain(), EventId::new(42), draft(2, 1)),
            Err(AuthError::NotFound)
        );
    }

    #[test]
    fn delete_event_requires_creator_and_admin() {
        let service = service();
        let category = service.create_category(&admin(), "Music").unwrap();

        // Created by the plain user: the creator lacks ADMIN, the admin is
        // not the creator, so nobody may delete it.
        let by_plain = service.create_event(draft(2, category.id.get())).unwrap();
        assert_eq!(
            service.delete_event(&plain(), by_plain.id),
            Err(AuthError::Forbidden)
        );
        assert_eq!(
            service.delete_event(&admin(), by_plain.id),
            Err(AuthError::Forbidden)
        );

        // Created by the admin: creator and ADMIN coincide.
        let by_admin = service.create_event(draft(1, category.id.get())).unwrap();
        assert!(service.delete_event(&admin(), by_admin.id).is_ok());
        assert!(service.get_event(by_admin.id).is_none());
    }

    #[test]
    fn category_mutations_are_admin_only() {
        let service = service();

        assert_eq!(
            service.create_category(&plain(), "Music"),
            Err(AuthError::Forbidden)
        );

        let category = service.create_category(&admin(), "Music").unwrap();
        assert_eq!(
            service.delete_category(&plain(), category.id),
            Err(AuthError::Forbidden)
        );
        assert!(service.delete_category(&admin(), category.id).is_ok());
        assert_eq!(
            service.delete_category(&admin(), category.id),
            Err(AuthError::NotFound)
        );
    }

    #[test]
    fn deleting_a_category_removes_its_events() {
        let service = service();
        let keep = service.create_category(&admin(), "Keep").unwrap();
        let doomed = service.create_category(&admin(), "Doomed").unwrap();

        let survivor = service.create_event(draft(2, keep.id.get())).unwrap();
        let casualty = service.create_event(draft(2, doomed.id.get())).unwrap();

        service.delete_category(&admin(), doomed.id).unwrap();

        assert!(service.get_event(survivor.id).is_some());
        assert!(service.get_event(casualty.id).is_none());
    }

    #[test]
    fn listing_by_creator_requires_the_user_to_exist() {
        let service = service();
        assert_eq!(
            service.list_events_by_creator(UserId::new(99)),
            Err(AuthError::NotFound)
        );

        let category = service.create_category(&admin(), "Music").unwrap();
        service.create_event(draft(2, category.id.get())).unwrap();
        service.create_event(draft(1, category.id.get())).unwrap();

        let mine = service.list_events_by_creator(UserId::new(2)).unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].creator_id, UserId::new(2));
    }

    #[test]
    fn sorted_listing_orders_by_name() {
        let service = service();
        let category = service.create_category(&admin(), "Music").unwrap();

        let mut b = draft(2, category.id.get());
        b.name = "Beta".to_string();
        let mut a = draft(2, category.id.get());
        a.name = "Alpha".to_string();

        service.create_event(b).unwrap();
        service.create_event(a).unwrap();

        let names: Vec<String> = service
            .list_events_sorted_by_name()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Alpha".to_string(), "Beta".to_string()]);
    }
}
