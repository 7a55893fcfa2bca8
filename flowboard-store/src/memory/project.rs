//! In-memory project store

use crate::error::{Result, StoreError};
use crate::latency::{pause, Latency};
use crate::service::ProjectService;
use crate::types::{NewProject, Project, ProjectId, ProjectPatch, ProjectStatus};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// In-memory project table with simulated latency
pub struct ProjectStore {
    latency: Latency,
    projects: RwLock<Vec<Project>>,
}

impl ProjectStore {
    /// Create an empty store
    pub fn new(latency: Latency) -> Self {
        Self::with_projects(latency, Vec::new())
    }

    /// Create a store pre-populated with the given projects
    pub fn with_projects(latency: Latency, projects: Vec<Project>) -> Self {
        Self {
            latency,
            projects: RwLock::new(projects),
        }
    }
}

#[async_trait]
impl ProjectService for ProjectStore {
    async fn get_all(&self) -> Result<Vec<Project>> {
        pause(self.latency.list).await;
        Ok(self.projects.read().await.clone())
    }

    async fn get_by_id(&self, id: ProjectId) -> Result<Project> {
        pause(self.latency.fetch).await;
        self.projects
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("project", id))
    }

    async fn create(&self, fields: NewProject) -> Result<Project> {
        pause(self.latency.create).await;
        let now = Utc::now();
        let mut projects = self.projects.write().await;
        let project = Project {
            id: ProjectId::new(super::next_id(projects.iter().map(|p| p.id.get()))),
            name: fields.name,
            description: fields.description,
            status: ProjectStatus::Active,
            progress: 0,
            member_ids: fields.member_ids,
            created_at: now,
            updated_at: now,
        };
        projects.push(project.clone());
        tracing::debug!(project = %project.id, "project created");
        Ok(project)
    }

    async fn update(&self, id: ProjectId, patch: ProjectPatch) -> Result<Project> {
        pause(self.latency.update).await;
        let mut projects = self.projects.write().await;
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("project", id))?;
        patch.apply(project);
        project.updated_at = Utc::now();
        Ok(project.clone())
    }

    async fn delete(&self, id: ProjectId) -> Result<()> {
        pause(self.latency.delete).await;
        let mut projects = self.projects.write().await;
        let index = projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("project", id))?;
        projects.remove(index);
        Ok(())
    }
}
