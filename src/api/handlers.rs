//! HTTP request handlers for the take-home pay API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_form;
use crate::content::LearnTopic;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayForm, PositionType};
use crate::session::{Interaction, Outcome, SessionSnapshot};

use super::request::{NavigateRequest, PayFormRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, DisclaimerResponse, EditResponse,
    EntitlementsResponse, NavigationResponse, RecordResponse, SessionCreated,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/sessions", post(create_session_handler))
        .route(
            "/sessions/:id",
            get(snapshot_handler).delete(end_session_handler),
        )
        .route("/sessions/:id/navigate", post(navigate_handler))
        .route(
            "/sessions/:id/records",
            post(store_handler).put(update_handler),
        )
        .route(
            "/sessions/:id/records/:index",
            get(view_handler).delete(delete_handler),
        )
        .route("/sessions/:id/records/:index/edit", post(begin_edit_handler))
        .route("/sessions/:id/edit", delete(cancel_edit_handler))
        .route("/content/entitlements/:position", get(entitlements_handler))
        .route("/content/learn/:topic", get(learn_handler))
        .route("/content/disclaimer", get(disclaimer_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Turns a body that failed to deserialize into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /calculate.
///
/// Validates the form and returns the rounded breakdown without touching
/// any session.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayFormRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let form: PayForm = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    if let Err(err) = form.validate() {
        return error_response(correlation_id, err);
    }

    let start_time = Instant::now();
    let breakdown = calculate_form(&form, state.config().config());
    info!(
        correlation_id = %correlation_id,
        period = %form.period,
        days = form.days_worked.len(),
        gross_income = %breakdown.gross_income,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    json_response(
        StatusCode::OK,
        CalculationResponse::new(&breakdown, form.position),
    )
}

/// Handler for POST /sessions.
async fn create_session_handler(State(state): State<AppState>) -> Response {
    let session_id = state.create_session().await;
    info!(session_id = %session_id, "Created session");
    json_response(StatusCode::CREATED, SessionCreated { session_id })
}

/// Handler for GET /sessions/:id.
async fn snapshot_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let sessions = state.sessions().read().await;
    match sessions.get(&id) {
        Some(session) => json_response(StatusCode::OK, session.snapshot()),
        None => error_response(Uuid::new_v4(), session_not_found(id)),
    }
}

/// Handler for DELETE /sessions/:id.
async fn end_session_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    if state.remove_session(id).await {
        info!(session_id = %id, "Ended session");
        StatusCode::NO_CONTENT.into_response()
    } else {
        error_response(Uuid::new_v4(), session_not_found(id))
    }
}

/// Handler for POST /sessions/:id/navigate.
async fn navigate_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<NavigateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match payload {
        Ok(Json(req)) => {
            interaction_response(&state, correlation_id, id, Interaction::Navigate(req.section))
                .await
        }
        Err(rejection) => rejection_response(correlation_id, rejection),
    }
}

/// Handler for POST /sessions/:id/records.
async fn store_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PayFormRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match payload {
        Ok(Json(req)) => {
            interaction_response(&state, correlation_id, id, Interaction::Store(req.into())).await
        }
        Err(rejection) => rejection_response(correlation_id, rejection),
    }
}

/// Handler for PUT /sessions/:id/records.
///
/// Overwrites whichever record the session is editing.
async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PayFormRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match payload {
        Ok(Json(req)) => {
            interaction_response(&state, correlation_id, id, Interaction::Update(req.into())).await
        }
        Err(rejection) => rejection_response(correlation_id, rejection),
    }
}

/// Handler for GET /sessions/:id/records/:index.
async fn view_handler(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Response {
    interaction_response(&state, Uuid::new_v4(), id, Interaction::View(index)).await
}

/// Handler for POST /sessions/:id/records/:index/edit.
async fn begin_edit_handler(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Response {
    interaction_response(&state, Uuid::new_v4(), id, Interaction::BeginEdit(index)).await
}

/// Handler for DELETE /sessions/:id/edit.
async fn cancel_edit_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    interaction_response(&state, Uuid::new_v4(), id, Interaction::CancelEdit).await
}

/// Handler for DELETE /sessions/:id/records/:index.
async fn delete_handler(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Response {
    interaction_response(&state, Uuid::new_v4(), id, Interaction::Delete(index)).await
}

/// Handler for GET /content/entitlements/:position.
async fn entitlements_handler(Path(position): Path<PositionType>) -> Response {
    json_response(StatusCode::OK, EntitlementsResponse::from(position))
}

/// Handler for GET /content/learn/:topic.
async fn learn_handler(Path(topic): Path<LearnTopic>) -> Response {
    json_response(StatusCode::OK, topic.panel())
}

/// Handler for GET /content/disclaimer.
async fn disclaimer_handler() -> Response {
    json_response(StatusCode::OK, DisclaimerResponse::default())
}

fn session_not_found(id: Uuid) -> EngineError {
    EngineError::SessionNotFound { id: id.to_string() }
}

/// Applies an interaction to a session under the write lock.
///
/// Records are stamped with today's local date.
async fn apply_interaction(
    state: &AppState,
    id: Uuid,
    interaction: Interaction,
) -> EngineResult<(Outcome, SessionSnapshot)> {
    let today = Local::now().date_naive();
    let mut sessions = state.sessions().write().await;
    let session = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;
    let outcome = session.apply(interaction, state.config().config(), today)?;
    Ok((outcome, session.snapshot()))
}

async fn interaction_response(
    state: &AppState,
    correlation_id: Uuid,
    id: Uuid,
    interaction: Interaction,
) -> Response {
    info!(
        correlation_id = %correlation_id,
        session_id = %id,
        interaction = ?interaction,
        "Processing session interaction"
    );

    match apply_interaction(state, id, interaction).await {
        Ok((outcome, snapshot)) => {
            info!(
                correlation_id = %correlation_id,
                session_id = %id,
                section = ?snapshot.section,
                records = snapshot.records.len(),
                "Interaction applied"
            );
            outcome_response(outcome, snapshot)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn outcome_response(outcome: Outcome, snapshot: SessionSnapshot) -> Response {
    match outcome {
        Outcome::Navigated { section } => json_response(
            StatusCode::OK,
            NavigationResponse {
                session: snapshot,
                panel: section.learn_topic().map(LearnTopic::panel),
            },
        ),
        Outcome::Stored { index, record } => {
            json_response(StatusCode::CREATED, RecordResponse::new(index, &record))
        }
        Outcome::Updated { index, record } | Outcome::Viewing { index, record } => {
            json_response(StatusCode::OK, RecordResponse::new(index, &record))
        }
        Outcome::Editing { index, form } => {
            json_response(StatusCode::OK, EditResponse { index, form })
        }
        Outcome::EditCancelled | Outcome::Deleted { .. } => {
            json_response(StatusCode::OK, snapshot)
        }
    }
}
