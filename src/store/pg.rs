//! Postgres store backend.
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE users (
//!     id UUID PRIMARY KEY,
//!     name TEXT NOT NULL,
//!     email TEXT NOT NULL UNIQUE,
//!     password_hash TEXT NOT NULL,
//!     created_at TIMESTAMPTZ NOT NULL
//! );
//!
//! CREATE TABLE tasks (
//!     id UUID PRIMARY KEY,
//!     title TEXT NOT NULL,
//!     description TEXT NOT NULL,
//!     owner_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
//!     created_at TIMESTAMPTZ NOT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskPatch, UserRecord};
use crate::store::{TaskStore, UserStore};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, user: UserRecord) -> Result<UserRecord, AppError> {
        sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (id, name, email, password_hash, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, name, email, password_hash, created_at",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("Email already registered".into())
            } else {
                e.into()
            }
        })
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl TaskStore for PgStore {
    async fn insert_task(&self, task: Task) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, title, description, owner_id, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, title, description, owner_id, created_at",
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.owner_id)
        .bind(task.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    async fn find_task(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, owner_id, created_at
             FROM tasks WHERE id = $1 AND owner_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn list_tasks(&self, owner_id: Uuid) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, owner_id, created_at
             FROM tasks WHERE owner_id = $1
             ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn update_task(
        &self,
        id: Uuid,
        owner_id: Uuid,
        patch: &TaskPatch,
    ) -> Result<Option<Task>, AppError> {
        // COALESCE keeps unsupplied fields; the whole patch is one statement,
        // so a concurrent update is last-write-wins per field set.
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks
             SET title = COALESCE($3, title), description = COALESCE($4, description)
             WHERE id = $1 AND owner_id = $2
             RETURNING id, title, description, owner_id, created_at",
        )
        .bind(id)
        .bind(owner_id)
        .bind(&patch.title)
        .bind(&patch.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn delete_task(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
