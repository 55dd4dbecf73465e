//! Route handlers. Each request runs one search against a fresh snapshot.

use crate::tool;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use roadmap_core::{Clock, FetchError, FilterSpec, QueryEngine, RecordSource, SearchResult};
use std::sync::Arc;

type Engine<S, C> = Arc<QueryEngine<S, C>>;

/// Build the router over a shared engine.
pub fn router<S, C>(engine: Arc<QueryEngine<S, C>>) -> Router
where
    S: RecordSource + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/healthz", get(healthz))
        .route("/tools", get(tools))
        .route("/search", get(search_query::<S, C>).post(search_body::<S, C>))
        .route("/features/{id}", get(feature::<S, C>))
        .with_state(engine)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn tools() -> Json<tool::ToolDescription> {
    Json(tool::describe())
}

async fn search_query<S: RecordSource, C: Clock>(
    State(engine): State<Engine<S, C>>,
    Query(spec): Query<FilterSpec>,
) -> Result<Json<SearchResult>, ApiError> {
    Ok(Json(engine.search(&spec).await?))
}

async fn search_body<S: RecordSource, C: Clock>(
    State(engine): State<Engine<S, C>>,
    Json(spec): Json<FilterSpec>,
) -> Result<Json<SearchResult>, ApiError> {
    Ok(Json(engine.search(&spec).await?))
}

/// ID fast path. Answers 404 (with the empty result as body) when absent.
async fn feature<S: RecordSource, C: Clock>(
    State(engine): State<Engine<S, C>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let result = engine.search(&FilterSpec::new().feature_id(id)).await?;
    let status = if result.total_found == 0 {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    Ok((status, Json(result)).into_response())
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A failed upstream fetch, reported as `502 Bad Gateway`.
#[derive(Debug)]
pub struct ApiError(FetchError);

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "search failed");
        let body = serde_json::json!({ "error": self.0.to_string() });
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}
