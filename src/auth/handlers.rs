use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    auth::dto::{LoginRequest, PublicAccount, SignupRequest},
    error::AppError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PublicAccount>), AppError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "unreadable signup body");
        AppError::InvalidInput
    })?;

    let account = state.accounts.register(payload).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<PublicAccount>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "unreadable login body");
        AppError::InvalidCredentialsFormat
    })?;

    let account = state.accounts.authenticate(payload).await?;
    Ok(Json(account))
}
