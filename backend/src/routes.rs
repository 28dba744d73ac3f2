use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use errandmate_shared::{
    available_tasks, conversations, profile_stats, ConversationSummary, DataError, DataSource,
    ProfileStats, Route, Task, TaskFilter, User,
};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DataSource + Send + Sync>,
    pub dist: PathBuf,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/me", get(current_user))
        .route("/api/tasks", get(list_tasks))
        .route("/api/tasks/available", get(list_available))
        .route("/api/conversations", get(list_conversations))
        .route("/api/users/:id/stats", get(user_stats))
        .nest_service("/pkg", ServeDir::new(state.dist.join("pkg")))
        .nest_service("/assets", ServeDir::new(state.dist.join("assets")))
        .fallback(spa_shell)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn data_error(err: DataError) -> StatusCode {
    match err {
        DataError::UserNotFound(id) => {
            tracing::debug!(%id, "unknown user requested");
            StatusCode::NOT_FOUND
        }
        DataError::Unavailable(reason) => {
            tracing::error!(%reason, "data source unavailable");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn current_user(State(state): State<AppState>) -> Result<Json<User>, StatusCode> {
    state.source.current_user().map(Json).map_err(data_error)
}

async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, StatusCode> {
    state.source.list_tasks().map(Json).map_err(data_error)
}

#[derive(Debug, Deserialize)]
struct AvailableParams {
    #[serde(rename = "type")]
    task_type: Option<String>,
    #[serde(default)]
    q: String,
}

async fn list_available(
    State(state): State<AppState>,
    Query(params): Query<AvailableParams>,
) -> Result<Json<Vec<Task>>, StatusCode> {
    let filter = match params.task_type.as_deref() {
        Some(key) => key.parse::<TaskFilter>().map_err(|err| {
            tracing::debug!(%err, "rejected listing filter");
            StatusCode::BAD_REQUEST
        })?,
        None => TaskFilter::All,
    };

    let tasks = state.source.list_tasks().map_err(data_error)?;
    let listing = available_tasks(&tasks, filter, &params.q)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(listing))
}

async fn list_conversations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ConversationSummary>>, StatusCode> {
    let me = state.source.current_user().map_err(data_error)?;
    let tasks = state.source.list_tasks().map_err(data_error)?;
    Ok(Json(conversations(&tasks, me.id)))
}

async fn user_stats(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<ProfileStats>, StatusCode> {
    let user = state.source.user(id.into()).map_err(data_error)?;
    let tasks = state.source.list_tasks().map_err(data_error)?;
    Ok(Json(profile_stats(&tasks, user.id)))
}

/// Serves the single-page shell for every non-API path. The client router
/// draws the page; unknown paths still get the shell but with a 404 status.
async fn spa_shell(State(state): State<AppState>, uri: Uri) -> Response {
    let route = Route::from_path(uri.path());
    let status = if route.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    match tokio::fs::read_to_string(state.dist.join("index.html")).await {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) if route.is_not_found() => {
            tracing::debug!(%err, path = uri.path(), "no shell for unknown path");
            (StatusCode::NOT_FOUND, "Page Not Found").into_response()
        }
        Err(err) => {
            tracing::warn!(%err, dist = %state.dist.display(), "frontend bundle missing");
            (StatusCode::SERVICE_UNAVAILABLE, "frontend bundle not built").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::{TimeZone, Utc};
    use errandmate_shared::source::{ALEX, PRIYA};
    use errandmate_shared::MockDataSource;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        router(AppState {
            source: Arc::new(MockDataSource::new(now)),
            dist: PathBuf::from("target/no-such-dist"),
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn me_returns_current_user() {
        let (status, body) = get_json("/api/me").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["display_name"], "Alex Rivera");
        assert_eq!(body["verification"], "verified");
    }

    #[tokio::test]
    async fn available_tasks_filter_by_type_and_search() {
        let (status, body) = get_json("/api/tasks/available?type=pet_care").await;
        assert_eq!(status, StatusCode::OK);
        let tasks = body.as_array().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0]["status"], "posted");

        let (_, body) = get_json("/api/tasks/available?q=KITCHEN").await;
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (_, body) = get_json("/api/tasks/available").await;
        assert_eq!(body.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn unknown_filter_is_bad_request() {
        let (status, _) = get_json("/api/tasks/available?type=gardening").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn conversations_for_current_user() {
        let (status, body) = get_json("/api/conversations").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn stats_for_known_and_unknown_users() {
        let (status, body) = get_json(&format!("/api/users/{ALEX}/stats")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tasks_posted"], 4);
        assert_eq!(body["success_rate"], 50);

        let (_, body) = get_json(&format!("/api/users/{PRIYA}/stats")).await;
        assert_eq!(body["tasks_completed"], 0);

        let missing = Uuid::from_u128(0xbeef);
        let (status, _) = get_json(&format!("/api/users/{missing}/stats")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let (status, _) = get_json("/nonexistent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn known_page_without_bundle_is_unavailable() {
        let (status, _) = get_json("/profile").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
