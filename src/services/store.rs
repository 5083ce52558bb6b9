/// User persistence seam and the in-process adapter
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::StoreError;
use crate::models::{Exercise, User};

/// Operations the tracker needs from a document store.
///
/// Lookups by id return `Ok(None)` for ids the store cannot resolve,
/// malformed ones included. Nothing here is transactional: a lookup
/// followed by an insert or append can interleave with other requests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Short backend name for diagnostics
    fn backend(&self) -> &'static str;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Insert a user with an empty log and return its assigned id
    async fn insert_user(&self, username: &str) -> Result<String, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Push onto the user's log. `false` when no user matched.
    async fn append_exercise(&self, id: &str, exercise: &Exercise) -> Result<bool, StoreError>;
}

/// Keeps users in memory, in insertion order
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<User>> {
        self.users.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<User>> {
        self.users.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.read().iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.read().iter().find(|u| u.id == id).cloned())
    }

    async fn insert_user(&self, username: &str) -> Result<String, StoreError> {
        let id = ObjectId::new().to_hex();
        self.write().push(User {
            id: id.clone(),
            username: username.to_string(),
            log: Vec::new(),
        });
        Ok(id)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.read().clone())
    }

    async fn append_exercise(&self, id: &str, exercise: &Exercise) -> Result<bool, StoreError> {
        let mut users = self.write();
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.log.push(exercise.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
