use std::collections::BTreeMap;
use std::sync::RwLock;

use authserver_auth::Role;
use authserver_core::UserId;
use authserver_users::{NewUser, User, UserDirectory};

#[derive(Debug, Default)]
struct DirectoryState {
    next_id: i64,
    users: BTreeMap<UserId, User>,
}

/// In-memory User Directory.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    state: RwLock<DirectoryState>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn find_by_id(&self, id: UserId) -> Option<User> {
        let state = match self.state.read() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state.users.get(&id).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        let state = match self.state.read() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state.users.values().find(|u| u.email == email).cloned()
    }

    fn find_all(&self) -> Vec<User> {
        let state = match self.state.read() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        let mut all: Vec<User> = state.users.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        all
    }

    fn find_all_by_role(&self, role: &Role) -> Vec<User> {
        self.find_all()
            .into_iter()
            .filter(|u| u.roles.contains(role))
            .collect()
    }

    fn count_by_role(&self, role: &Role) -> usize {
        let state = match self.state.read() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state
            .users
            .values()
            .filter(|u| u.roles.contains(role))
            .count()
    }

    fn create(&self, user: NewUser) -> User {
        let mut state = match self.state.write() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state.next_id += 1;
        let user = User {
            id: UserId::new(state.next_id),
            email: user.email,
            password: user.password,
            name: user.name,
            roles: user.roles,
        };
        state.users.insert(user.id, user.clone());
        user
    }

    fn delete(&self, id: UserId) -> Option<User> {
        let mut state = match self.state.write() {
            Ok(s) => s,
            Err(e) => e.into_inner(),
        };
        state.users.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use authserver_auth::RoleSet;

    use super::*;

    fn new_user(name: &str, roles: &[&'static str]) -> NewUser {
        NewUser {
            email: format!("{name}@email.com"),
            password: "secret".to_string(),
            name: name.to_string(),
            roles: roles.iter().map(|r| Role::new(*r)).collect::<RoleSet>(),
        }
    }

    #[test]
    fn assigns_increasing_ids_starting_at_one() {
        let directory = InMemoryUserDirectory::new();
        let a = directory.create(new_user("a", &["USER"]));
        let b = directory.create(new_user("b", &["USER"]));
        assert_eq!(a.id, UserId::new(1));
        assert_eq!(b.id, UserId::new(2));
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let directory = InMemoryUserDirectory::new();
        let a = directory.create(new_user("a", &["USER"]));
        directory.delete(a.id).unwrap();
        let b = directory.create(new_user("b", &["USER"]));
        assert!(b.id > a.id);
    }

    #[test]
    fn find_all_sorts_by_name() {
        let directory = InMemoryUserDirectory::new();
        directory.create(new_user("zoe", &["USER"]));
        directory.create(new_user("amy", &["USER"]));

        let names: Vec<String> = directory.find_all().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["amy".to_string(), "zoe".to_string()]);
    }

    #[test]
    fn role_queries_agree() {
        let directory = InMemoryUserDirectory::new();
        directory.create(new_user("a", &["USER", "ADMIN"]));
        directory.create(new_user("b", &["USER"]));
        directory.create(new_user("c", &["USER", "ADMIN"]));

        let admin = Role::admin();
        assert_eq!(directory.find_all_by_role(&admin).len(), 2);
        assert_eq!(directory.count_by_role(&admin), 2);
        assert_eq!(directory.count_by_role(&Role::user()), 3);
    }

    #[test]
    fn reads_survive_a_poisoned_lock() {
        let directory = std::sync::Arc::new(InMemoryUserDirectory::new());
        let a = directory.create(new_user("a", &["USER", "ADMIN"]));

        // Panic while holding the write guard to poison the lock.
        let poisoner = std::sync::Arc::clone(&directory);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.state.write().unwrap();
            panic!("poisoning the directory lock");
        })
        .join();

        assert_eq!(directory.find_by_id(a.id).unwrap().id, a.id);
        assert!(directory.find_by_email("a@email.com").is_some());
        assert_eq!(directory.find_all().len(), 1);
        assert_eq!(directory.count_by_role(&Role::admin()), 1);
        assert!(directory.delete(a.id).is_some());
    }

    #[test]
    fn email_lookup_finds_the_record() {
        let directory = InMemoryUserDirectory::new();
        let a = directory.create(new_user("a", &["USER"]));
        assert_eq!(directory.find_by_email("a@email.com").unwrap().id, a.id);
        assert!(directory.find_by_email("missing@email.com").is_none());
    }
}
