//!
//! # Store backends
//!
//! The durable state of the application lives behind two traits: `UserStore`
//! (the credential store, keyed by email) and `TaskStore` (the task
//! collection, always addressed by id + owner). Handlers only ever see
//! `SharedStore`, so the Postgres backend and the in-memory backend are
//! interchangeable; the in-memory one backs local runs without a database
//! and the whole test suite.
//!
//! Both backends provide per-record atomicity and nothing more: concurrent
//! updates to the same task are last-write-wins, with no conflict detection.

pub mod memory;
pub mod pg;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskPatch, UserRecord};

pub use memory::MemoryStore;
pub use pg::PgStore;

/// Credential store contract: upsert-by-email with a uniqueness constraint,
/// fetch-by-email.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user. Fails with `AppError::Conflict` when the email
    /// is already registered.
    async fn insert_user(&self, user: UserRecord) -> Result<UserRecord, AppError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError>;
}

/// Task store contract. Every lookup and mutation is scoped by owner, so a
/// caller holding someone else's task id observes plain absence.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn insert_task(&self, task: Task) -> Result<Task, AppError>;

    async fn find_task(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Task>, AppError>;

    /// All tasks owned by `owner_id`, newest-first by creation timestamp.
    async fn list_tasks(&self, owner_id: Uuid) -> Result<Vec<Task>, AppError>;

    /// Applies the supplied fields of `patch` to the matching task.
    /// `None` when no task with that id is owned by `owner_id`.
    async fn update_task(
        &self,
        id: Uuid,
        owner_id: Uuid,
        patch: &TaskPatch,
    ) -> Result<Option<Task>, AppError>;

    /// `false` when no task with that id is owned by `owner_id`.
    async fn delete_task(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError>;
}

pub trait Backend: UserStore + TaskStore {}

impl<T: UserStore + TaskStore> Backend for T {}

/// The store handle registered as actix app data.
pub type SharedStore = Arc<dyn Backend>;
