//! In-memory dependency store

use crate::error::{Result, StoreError};
use crate::latency::{pause, Latency};
use crate::service::DependencyService;
use crate::types::{Dependency, DependencyId, DependencyPatch, NewDependency};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// In-memory dependency table with simulated latency
///
/// Endpoints are not validated against the task table. A pair whose task
/// has been deleted simply stops rendering.
pub struct DependencyStore {
    latency: Latency,
    dependencies: RwLock<Vec<Dependency>>,
}

impl DependencyStore {
    /// Create an empty store
    pub fn new(latency: Latency) -> Self {
        Self::with_dependencies(latency, Vec::new())
    }

    /// Create a store pre-populated with the given dependencies
    pub fn with_dependencies(latency: Latency, dependencies: Vec<Dependency>) -> Self {
        Self {
            latency,
            dependencies: RwLock::new(dependencies),
        }
    }
}

#[async_trait]
impl DependencyService for DependencyStore {
    async fn get_all(&self) -> Result<Vec<Dependency>> {
        pause(self.latency.list).await;
        Ok(self.dependencies.read().await.clone())
    }

    async fn get_by_id(&self, id: DependencyId) -> Result<Dependency> {
        pause(self.latency.fetch).await;
        self.dependencies
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("dependency", id))
    }

    async fn create(&self, fields: NewDependency) -> Result<Dependency> {
        pause(self.latency.create).await;
        let now = Utc::now();
        let mut dependencies = self.dependencies.write().await;
        let dependency = Dependency {
            id: DependencyId::new(super::next_id(dependencies.iter().map(|d| d.id.get()))),
            predecessor_id: fields.predecessor_id,
            successor_id: fields.successor_id,
            created_at: now,
            updated_at: now,
        };
        dependencies.push(dependency.clone());
        Ok(dependency)
    }

    async fn update(&self, id: DependencyId, patch: DependencyPatch) -> Result<Dependency> {
        pause(self.latency.update).await;
        let mut dependencies = self.dependencies.write().await;
        let dependency = dependencies
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::not_found("dependency", id))?;
        patch.apply(dependency);
        dependency.updated_at = Utc::now();
        Ok(dependency.clone())
    }

    async fn delete(&self, id: DependencyId) -> Result<()> {
        pause(self.latency.delete).await;
        let mut dependencies = self.dependencies.write().await;
        let index = dependencies
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| StoreError::not_found("dependency", id))?;
        dependencies.remove(index);
        Ok(())
    }
}
