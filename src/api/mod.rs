use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;

use crate::{
    PackwiseError, VERSION,
    catalog::Catalog,
    checklist::{Checklist, ChecklistSnapshot},
    config::TripConfig,
    engine::PackingEngine,
    form::{FormOptions, TripForm},
};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    limits: TripConfig,
}

impl AppState {
    pub fn new(catalog: Catalog, limits: TripConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            limits,
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl IntoResponse for PackwiseError {
    fn into_response(self) -> Response {
        let status = if self.is_user_error() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            tracing::error!("Request failed: {}", self);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let body = json!({
            "error": {
                "code": status.as_u16(),
                "message": self.user_message(),
            }
        });
        (status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/catalog", get(get_catalog))
        .route("/packing-list", post(create_packing_list))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: VERSION,
    })
}

async fn get_catalog(State(state): State<AppState>) -> Json<FormOptions> {
    Json(FormOptions::from_catalog(&state.catalog, &state.limits))
}

/// Unwrap a JSON body, turning axum's plain-text rejection into a validation
/// error so it is reported with the JSON error body
fn extract_json<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, PackwiseError> {
    body.map(|Json(value)| value)
        .map_err(|err| PackwiseError::validation(err.body_text()))
}

async fn create_packing_list(
    State(state): State<AppState>,
    body: Result<Json<TripForm>, JsonRejection>,
) -> Result<Json<ChecklistSnapshot>, PackwiseError> {
    let form = extract_json(body)?;
    let request = form.submit(&state.limits)?;
    let items = PackingEngine::new(&state.catalog).generate(&request);
    tracing::info!(
        "Generated {} items for {} ({} days)",
        items.len(),
        request.destination,
        request.duration_days
    );
    let checklist = Checklist::new((&request).into(), items);
    Ok(Json(checklist.snapshot()))
}
