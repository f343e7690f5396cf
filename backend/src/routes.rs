use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use shared::{CreateTaskRequest, Task, UpdateTaskRequest};
use tracing::info;

use crate::{error::ApiError, repo::TaskRepository};

pub async fn list_tasks(
    State(repo): State<TaskRepository>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = repo.list().await?;
    info!(count = tasks.len(), "fetched tasks");
    Ok(Json(tasks))
}

pub async fn create_task(
    State(repo): State<TaskRepository>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    payload.validate()?;
    let task = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn get_task(
    Path(id): Path<i64>,
    State(repo): State<TaskRepository>,
) -> Result<Json<Task>, ApiError> {
    repo.get(id).await?.map(Json).ok_or(ApiError::NotFound(id))
}

pub async fn update_task(
    Path(id): Path<i64>,
    State(repo): State<TaskRepository>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    payload.validate()?;
    repo.update(id, payload)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

pub async fn delete_task(
    Path(id): Path<i64>,
    State(repo): State<TaskRepository>,
) -> Result<StatusCode, ApiError> {
    if repo.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(id))
    }
}
