//! In-memory comment store

use crate::error::{Result, StoreError};
use crate::latency::{pause, Latency};
use crate::service::CommentService;
use crate::types::{Comment, CommentId, CommentPatch, NewComment, TaskId};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// In-memory comment table with simulated latency
pub struct CommentStore {
    latency: Latency,
    comments: RwLock<Vec<Comment>>,
}

impl CommentStore {
    /// Create an empty store
    pub fn new(latency: Latency) -> Self {
        Self::with_comments(latency, Vec::new())
    }

    /// Create a store pre-populated with the given comments
    pub fn with_comments(latency: Latency, comments: Vec<Comment>) -> Self {
        Self {
            latency,
            comments: RwLock::new(comments),
        }
    }
}

#[async_trait]
impl CommentService for CommentStore {
    async fn get_all(&self) -> Result<Vec<Comment>> {
        pause(self.latency.list).await;
        Ok(self.comments.read().await.clone())
    }

    async fn get_by_id(&self, id: CommentId) -> Result<Comment> {
        pause(self.latency.fetch).await;
        self.comments
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("comment", id))
    }

    async fn get_by_task(&self, task_id: TaskId) -> Result<Vec<Comment>> {
        pause(self.latency.list).await;
        Ok(self
            .comments
            .read()
            .await
            .iter()
            .filter(|c| c.task_id == task_id)
            .cloned()
            .collect())
    }

    async fn create(&self, fields: NewComment) -> Result<Comment> {
        pause(self.latency.create).await;
        let now = Utc::now();
        let mut comments = self.comments.write().await;
        let comment = Comment {
            id: CommentId::new(super::next_id(comments.iter().map(|c| c.id.get()))),
            task_id: fields.task_id,
            author_id: fields.author_id,
            body: fields.body,
            created_at: now,
            updated_at: now,
        };
        comments.push(comment.clone());
        tracing::debug!(comment = %comment.id, task = %comment.task_id, "comment posted");
        Ok(comment)
    }

    async fn update(&self, id: CommentId, patch: CommentPatch) -> Result<Comment> {
        pause(self.latency.update).await;
        let mut comments = self.comments.write().await;
        let comment = comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("comment", id))?;
        patch.apply(comment);
        comment.updated_at = Utc::now();
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> Result<()> {
        pause(self.latency.delete).await;
        let mut comments = self.comments.write().await;
        let index = comments
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("comment", id))?;
        comments.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    #[tokio::test]
    async fn test_thread_stays_in_posting_order() {
        let store = CommentStore::new(Latency::none());
        let task = TaskId::new(1);
        let author = UserId::new(1);

        store
            .create(NewComment::new(task, author, "First pass done"))
            .await
            .unwrap();
        store
            .create(NewComment::new(task, author, "Review comments addressed"))
            .await
            .unwrap();
        store
            .create(NewComment::new(TaskId::new(2), author, "Unrelated"))
            .await
            .unwrap();

        let thread = store.get_by_task(task).await.unwrap();
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].body, "First pass done");
        assert_eq!(thread[1].body, "Review comments addressed");
    }

    #[tokio::test]
    async fn test_edit_comment() {
        let store = CommentStore::new(Latency::none());
        let posted = store
            .create(NewComment::new(TaskId::new(1), UserId::new(1), "typo"))
            .await
            .unwrap();

        let edited = store
            .update(posted.id, CommentPatch::new().with_body("fixed"))
            .await
            .unwrap();
        assert_eq!(edited.body, "fixed");
    }
}
