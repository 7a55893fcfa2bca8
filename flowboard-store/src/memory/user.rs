//! In-memory user store

use crate::error::{Result, StoreError};
use crate::latency::{pause, Latency};
use crate::service::UserService;
use crate::types::{NewUser, User, UserId, UserPatch};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// In-memory user table with simulated latency
pub struct UserStore {
    latency: Latency,
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new(latency: Latency) -> Self {
        Self::with_users(latency, Vec::new())
    }

    /// Create a store pre-populated with the given users
    pub fn with_users(latency: Latency, users: Vec<User>) -> Self {
        Self {
            latency,
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserService for UserStore {
    async fn get_all(&self) -> Result<Vec<User>> {
        pause(self.latency.list).await;
        Ok(self.users.read().await.clone())
    }

    async fn get_by_id(&self, id: UserId) -> Result<User> {
        pause(self.latency.fetch).await;
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("user", id))
    }

    async fn create(&self, fields: NewUser) -> Result<User> {
        pause(self.latency.create).await;
        let now = Utc::now();
        let mut users = self.users.write().await;
        let user = User {
            id: UserId::new(super::next_id(users.iter().map(|u| u.id.get()))),
            name: fields.name,
            email: fields.email,
            role: fields.role,
            avatar: None,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        tracing::debug!(user = %user.id, "user created");
        Ok(user)
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User> {
        pause(self.latency.update).await;
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found("user", id))?;
        patch.apply(user);
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> Result<()> {
        pause(self.latency.delete).await;
        let mut users = self.users.write().await;
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found("user", id))?;
        users.remove(index);
        Ok(())
    }
}
