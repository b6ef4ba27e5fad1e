use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

use crate::data::Loader;
use crate::domain::{CountryResponse, LookupError};
use crate::repository::{CountryRepository, SharedIndex};
use crate::service::CountryService;
use crate::telemetry;

/// Public lookup endpoints.
pub fn lookup_router<R>(service: Arc<CountryService<R>>) -> Router
where
    R: CountryRepository + 'static,
{
    Router::new()
        .route("/api/convert", get(convert_handler::<R>))
        .route("/api/countries/:code", get(code_handler::<R>))
        .route("/stats", get(stats_handler::<R>))
        .with_state(service)
}

/// State behind the reload endpoint: the live index and the source it is rebuilt from.
#[derive(Clone)]
pub struct ReloadState {
    pub index: Arc<SharedIndex>,
    pub source: Arc<dyn Loader>,
}

pub fn admin_router(state: ReloadState) -> Router {
    Router::new()
        .route("/api/admin/reload", post(reload_handler))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConvertParams {
    #[serde(default)]
    country: Option<String>,
}

pub(crate) async fn convert_handler<R>(
    State(service): State<Arc<CountryService<R>>>,
    Query(params): Query<ConvertParams>,
) -> Response
where
    R: CountryRepository + 'static,
{
    let query = params.country.unwrap_or_default();
    lookup_response(service.lookup(&query))
}

pub(crate) async fn code_handler<R>(
    State(service): State<Arc<CountryService<R>>>,
    Path(code): Path<String>,
) -> Response
where
    R: CountryRepository + 'static,
{
    lookup_response(service.lookup_code(&code))
}

pub(crate) async fn stats_handler<R>(State(service): State<Arc<CountryService<R>>>) -> Response
where
    R: CountryRepository + 'static,
{
    (StatusCode::OK, axum::Json(service.stats())).into_response()
}

fn lookup_response(outcome: Result<CountryResponse, LookupError>) -> Response {
    match outcome {
        Ok(country) => (StatusCode::OK, axum::Json(country)).into_response(),
        Err(err) => {
            let status = match err {
                LookupError::Validation { .. } => StatusCode::BAD_REQUEST,
                LookupError::NotFound { .. } => StatusCode::NOT_FOUND,
            };
            debug!(query = err.query(), result = err.result_label(), "lookup failed");
            let payload = json!({
                "error": err.to_string(),
                "query": err.query(),
            });
            (status, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn reload_handler(State(state): State<ReloadState>) -> Response {
    let ReloadState { index, source } = state;
    let rebuilt = tokio::task::spawn_blocking(move || index.reload(source.as_ref())).await;

    match rebuilt {
        Ok(Ok(index)) => {
            telemetry::record_index(&index, "reload");
            let summary = index.summary();
            let payload = json!({
                "message": "country index reloaded",
                "countries": summary.countries,
                "keys": summary.keys,
                "collisions": summary.collisions,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(Err(err)) => {
            error!(error = %err, "reload failed; keeping previous index");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(join) => {
            error!(error = %join, "reload task aborted");
            let payload = json!({ "error": "reload task aborted" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
