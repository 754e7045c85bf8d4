//! In-memory store backend.
//!
//! Serves two purposes: local runs without a `DATABASE_URL`, and a hermetic
//! backend for the test suite. State is process-local and gone on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskPatch, UserRecord};
use crate::store::{TaskStore, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<UserRecord>>,
    // Newest task first; list_tasks relies on this insertion order so that
    // tasks created within the same timestamp tick still come back
    // newest-first.
    tasks: RwLock<Vec<Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: UserRecord) -> Result<UserRecord, AppError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict("Email already registered".into()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn insert_task(&self, task: Task) -> Result<Task, AppError> {
        let mut tasks = self.tasks.write().await;
        tasks.insert(0, task.clone());
        Ok(task)
    }

    async fn find_task(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Task>, AppError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .find(|t| t.id == id && t.owner_id == owner_id)
            .cloned())
    }

    async fn list_tasks(&self, owner_id: Uuid) -> Result<Vec<Task>, AppError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn update_task(
        &self,
        id: Uuid,
        owner_id: Uuid,
        patch: &TaskPatch,
    ) -> Result<Option<Task>, AppError> {
        let mut tasks = self.tasks.write().await;
        match tasks
            .iter_mut()
            .find(|t| t.id == id && t.owner_id == owner_id)
        {
            Some(task) => {
                patch.apply(task);
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_task(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let mut tasks = self.tasks.write().await;
        match tasks
            .iter()
            .position(|t| t.id == id && t.owner_id == owner_id)
        {
            Some(index) => {
                tasks.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
