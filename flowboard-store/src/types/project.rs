//! Project types

use super::ids::{ProjectId, UserId};
use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Archived,
}

impl ProjectStatus {
    /// Wire name (`active`, `completed`, `archived`)
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProjectStatus::Active),
            "completed" => Ok(ProjectStatus::Completed),
            "archived" => Ok(ProjectStatus::Archived),
            _ => Err(StoreError::invalid_value(
                "project status",
                format!("unknown project status '{s}'"),
            )),
        }
    }
}

/// A project groups tasks and team members
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: ProjectStatus,
    /// Completion percentage, 0 to 100
    pub progress: u8,
    /// Member users. Weak references into the user table.
    #[serde(default)]
    pub member_ids: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a project. New projects start active with zero
/// progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub member_ids: Vec<UserId>,
}

impl NewProject {
    /// Create project fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            member_ids: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the member list
    pub fn with_members(mut self, member_ids: Vec<UserId>) -> Self {
        self.member_ids = member_ids;
        self
    }
}

/// Partial update for a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub progress: Option<u8>,
    /// Replaces the whole member list
    pub member_ids: Option<Vec<UserId>>,
}

impl ProjectPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the progress percentage
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Replace the member list
    pub fn with_members(mut self, member_ids: Vec<UserId>) -> Self {
        self.member_ids = Some(member_ids);
        self
    }

    /// Merge the present fields over the project
    pub fn apply(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(progress) = self.progress {
            project.progress = progress;
        }
        if let Some(member_ids) = &self.member_ids {
            project.member_ids = member_ids.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_status_parse() {
        assert_eq!(
            "active".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::Active
        );
        assert!("paused".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn test_patch_merge() {
        let now = Utc::now();
        let mut project = Project {
            id: ProjectId::new(1),
            name: "Website relaunch".into(),
            description: String::new(),
            status: ProjectStatus::Active,
            progress: 0,
            member_ids: vec![UserId::new(1)],
            created_at: now,
            updated_at: now,
        };

        ProjectPatch::new()
            .with_progress(40)
            .with_status(ProjectStatus::Completed)
            .apply(&mut project);

        assert_eq!(project.progress, 40);
        assert_eq!(project.status, ProjectStatus::Completed);
        assert_eq!(project.name, "Website relaunch");
        assert_eq!(project.member_ids, vec![UserId::new(1)]);
    }
}
