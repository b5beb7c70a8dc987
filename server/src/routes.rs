use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::AppError;
use crate::model::{CreateTodo, Todo, UpdateTodo};
use crate::Db;

pub(crate) async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    debug!(count = todos.len(), "listing todos");
    Json(todos.values().cloned().collect())
}

pub(crate) async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo::create(input);
    info!(id = %todo.id, title = %todo.title, "created todo");
    db.write().await.insert(todo.id, todo.clone());
    (StatusCode::CREATED, Json(todo))
}

pub(crate) async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, AppError> {
    let todos = db.read().await;
    todos.get(&id).cloned().map(Json).ok_or(AppError::NotFound(id))
}

pub(crate) async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, AppError> {
    let mut todos = db.write().await;
    let todo = todos.get_mut(&id).ok_or(AppError::NotFound(id))?;
    todo.apply(input);
    info!(%id, title = %todo.title, completed = todo.completed, "updated todo");
    Ok(Json(todo.clone()))
}

pub(crate) async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut todos = db.write().await;
    todos.remove(&id).ok_or(AppError::NotFound(id))?;
    info!(%id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}
