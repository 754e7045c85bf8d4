use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{Task, TaskInput, TaskPatch},
    store::SharedStore,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

/// Lists the authenticated user's tasks, newest-first by creation time.
/// Never contains another owner's tasks; an empty list is a 200, not a 404.
#[get("")]
pub async fn list_tasks(
    store: web::Data<SharedStore>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = store.list_tasks(user.0).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a task owned by the authenticated user.
///
/// The owner is taken from the verified token, never from the body; the id
/// and creation timestamp are server-assigned.
#[post("")]
pub async fn create_task(
    store: web::Data<SharedStore>,
    user: AuthenticatedUser,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = Task::new(task_data.into_inner(), user.0);
    let task = store.insert_task(task).await?;

    Ok(HttpResponse::Created().json(task))
}

/// Fetches a single task by id.
///
/// A task that does not exist and a task owned by someone else produce the
/// same 404, so non-owners cannot learn whether an id is in use.
#[get("/{id}")]
pub async fn get_task(
    store: web::Data<SharedStore>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    match store.find_task(task_id.into_inner(), user.0).await? {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => Err(AppError::NotFound("Task not found".into())),
    }
}

/// Applies a partial update to a task the authenticated user owns.
///
/// Only the supplied fields change; owner and id are not patchable. The 404
/// rule is the same as for `get_task`.
#[put("/{id}")]
pub async fn update_task(
    store: web::Data<SharedStore>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
    patch: web::Json<TaskPatch>,
) -> Result<impl Responder, AppError> {
    patch.validate()?;

    match store
        .update_task(task_id.into_inner(), user.0, &patch)
        .await?
    {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => Err(AppError::NotFound("Task not found".into())),
    }
}

/// Permanently deletes a task the authenticated user owns. No soft-delete,
/// no recovery; the 404 rule is the same as for `get_task`.
#[delete("/{id}")]
pub async fn delete_task(
    store: web::Data<SharedStore>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    if store.delete_task(task_id.into_inner(), user.0).await? {
        Ok(HttpResponse::Ok().json(json!({ "message": "Task deleted" })))
    } else {
        Err(AppError::NotFound("Task not found".into()))
    }
}
