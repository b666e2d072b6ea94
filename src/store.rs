use crate::User;
use crate::error::UserStoreError;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-memory user directory backing the stub Users API.
///
/// Ids are assigned from a monotonically increasing counter starting at 1 and
/// are never reused within the lifetime of a store, so a deleted id stays a
/// reliable 404 target.
#[derive(Debug, Default)]
pub struct UserStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    users: BTreeMap<u64, User>,
    last_id: u64,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, name: String, email: String) -> User {
        let mut inner = self.inner.write().unwrap();
        inner.last_id += 1;
        let user = User::new(inner.last_id, name, email);
        inner.users.insert(user.id, user.clone());
        user
    }

    pub fn get(&self, id: u64) -> Result<User, UserStoreError> {
        self.inner
            .read()
            .unwrap()
            .users
            .get(&id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound { id })
    }

    /// Full replacement of name and email. The id is immutable.
    pub fn update(&self, id: u64, name: String, email: String) -> Result<User, UserStoreError> {
        let mut inner = self.inner.write().unwrap();
        match inner.users.get_mut(&id) {
            Some(user) => {
                user.name = name;
                user.email = email;
                Ok(user.clone())
            }
            None => Err(UserStoreError::UserNotFound { id }),
        }
    }

    pub fn remove(&self, id: u64) -> Result<(), UserStoreError> {
        let mut inner = self.inner.write().unwrap();
        match inner.users.remove(&id) {
            Some(_) => Ok(()),
            None => Err(UserStoreError::UserNotFound { id }),
        }
    }

    /// All users in ascending id order.
    pub fn list(&self) -> Vec<User> {
        self.inner.read().unwrap().users.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().users.is_empty()
    }
}
