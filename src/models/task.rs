use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A task as stored and as returned by the API.
///
/// `owner_id` is set at creation from the authenticated identity and is
/// immutable; a task is visible and mutable only through requests
/// authenticated as its owner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a task. Both fields are required and non-empty.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 1000))]
    pub description: String,
}

/// Partial update for a task: any subset of the mutable fields.
///
/// Owner and id are deliberately not expressible here, so a patch can never
/// reassign a task. A field that is supplied must still be non-empty.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct TaskPatch {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 1000))]
    pub description: Option<String>,
}

impl TaskPatch {
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
    }
}

impl Task {
    /// Builds a new task owned by `owner_id`, with a fresh id and a
    /// server-assigned creation timestamp.
    pub fn new(input: TaskInput, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            owner_id,
            created_at: Utc::now(),
        }
    }
}
