use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use jisho_core::SearchError;
use jisho_types::{DictionaryEntry, SearchQuery};
use serde::Deserialize;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CatchPanicLayer::new());

    Router::new()
        .route("/search/*query", get(search_handler))
        .route("/health", get(health_handler))
        .layer(middleware)
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Kept raw so a malformed page falls back to the first page instead of a 400
    page: Option<String>,
}

async fn search_handler(
    State(state): State<AppState>,
    Path(query): Path<String>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<DictionaryEntry>>, ApiError> {
    let query = SearchQuery::from_raw_page(query, params.page.as_deref());

    let entries = state.coordinator.resolve(&query).await.map_err(|e| {
        tracing::error!(%query, error = %e, "search failed");
        ApiError(e)
    })?;

    Ok(Json(entries))
}

async fn health_handler() -> &'static str {
    "."
}

/// Per-request failure rendered as `{"error": "..."}`
pub struct ApiError(SearchError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SearchError::Fetch(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
