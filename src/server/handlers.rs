//! Form handlers wiring HTTP requests to the action layer
//!
//! Each handler parses the urlencoded body, invokes the matching action,
//! and renders its [`ActionOutcome`]: `303 See Other` for redirects,
//! `200` for success messages, `422` for recovered failures. Rethrown
//! errors become a 500 via [`AppError`].

use crate::actions::{self, ActionContext};
use crate::core::error::AppError;
use crate::core::form::FormData;
use crate::core::outcome::ActionOutcome;
use axum::Json;
use axum::extract::{Form, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Shared state for all form handlers
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<ActionContext>,
}

/// Newtype rendering an [`ActionOutcome`] as an HTTP response.
pub struct OutcomeResponse(pub ActionOutcome);

impl IntoResponse for OutcomeResponse {
    fn into_response(self) -> Response {
        match self.0 {
            ActionOutcome::Redirect { path } => {
                (StatusCode::SEE_OTHER, [(header::LOCATION, path)]).into_response()
            }
            outcome @ ActionOutcome::Success { .. } => {
                (StatusCode::OK, Json(outcome)).into_response()
            }
            outcome @ ActionOutcome::Failure { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(outcome)).into_response()
            }
        }
    }
}

pub async fn create_invoice(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<OutcomeResponse, AppError> {
    let outcome = actions::create_invoice(&state.ctx, &FormData::from(fields)).await?;
    Ok(OutcomeResponse(outcome))
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<OutcomeResponse, AppError> {
    let outcome = actions::update_invoice(&state.ctx, &id, &FormData::from(fields)).await?;
    Ok(OutcomeResponse(outcome))
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<OutcomeResponse, AppError> {
    let outcome = actions::delete_invoice(&state.ctx, &id).await?;
    Ok(OutcomeResponse(outcome))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<OutcomeResponse, AppError> {
    let outcome = actions::create_customer(&state.ctx, &FormData::from(fields)).await?;
    Ok(OutcomeResponse(outcome))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<OutcomeResponse, AppError> {
    let outcome = actions::update_customer(&state.ctx, &id, &FormData::from(fields)).await?;
    Ok(OutcomeResponse(outcome))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<OutcomeResponse, AppError> {
    let outcome = actions::delete_customer(&state.ctx, &id).await?;
    Ok(OutcomeResponse(outcome))
}

pub async fn login(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<OutcomeResponse, AppError> {
    let outcome = actions::authenticate(&state.ctx, &FormData::from(fields)).await?;
    Ok(OutcomeResponse(outcome))
}
