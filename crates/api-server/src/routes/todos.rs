//! Todo API endpoints

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, Uri},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{Map, Value};

use todo_core::task::Task;

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Request types
// ============================================================================

#[derive(Debug)]
pub struct CreateTodoRequest {
    pub title: String,
}

impl CreateTodoRequest {
    /// Decode the first JSON object in `body`
    ///
    /// Anything after that object is ignored. The `title` key is matched
    /// exactly first, then case-insensitively. An absent or null title
    /// decodes to the empty string, which the store rejects.
    pub fn decode(body: &[u8]) -> Result<Self, ApiError> {
        let fields = serde_json::Deserializer::from_slice(body)
            .into_iter::<Map<String, Value>>()
            .next()
            .and_then(|first| first.ok())
            .ok_or(ApiError::InvalidJson)?;

        let title = fields.get("title").or_else(|| {
            fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("title"))
                .map(|(_, value)| value)
        });

        let title = match title {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(title)) => title.clone(),
            Some(_) => return Err(ApiError::InvalidJson),
        };

        Ok(Self { title })
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /todos - List all todos
async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.task_store().list().await?;
    Ok(Json(tasks))
}

/// POST /todos - Create a new todo
///
/// The body is decoded by hand so that any decoding failure, including a
/// missing or wrong content type, yields the same 400 response.
async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let req = CreateTodoRequest::decode(&body)?;

    let task = state.task_store().create(req.title).await?;
    tracing::debug!(id = %task.id, "todo created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// POST /todos/{id}/complete - Mark a todo completed
async fn complete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let id = require_id(id)?;
    let task = state.task_store().complete(&id).await?;
    tracing::debug!(id = %task.id, "todo completed");
    Ok(Json(task))
}

/// DELETE /todos/{id} - Delete a todo
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = require_id(id)?;
    state.task_store().delete(&id).await?;
    tracing::debug!(%id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Anything the routes above do not match
async fn unmatched(uri: Uri) -> ApiError {
    match uri.path().strip_prefix("/todos/") {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => ApiError::MissingId,
        Some(_) => ApiError::MethodNotAllowed,
        None => ApiError::PageNotFound,
    }
}

fn require_id(id: String) -> Result<String, ApiError> {
    if id.is_empty() {
        return Err(ApiError::MissingId);
    }
    Ok(id)
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            get(list_todos)
                .head(method_not_allowed)
                .post(create_todo)
                .fallback(method_not_allowed),
        )
        .route(
            "/todos/{id}",
            delete(delete_todo).fallback(method_not_allowed),
        )
        .route(
            "/todos/{id}/complete",
            post(complete_todo).fallback(method_not_allowed),
        )
        .fallback(unmatched)
}
