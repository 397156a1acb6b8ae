//! Registration, token issuance, and the authenticated echo endpoint.

use crate::auth::PasswordHasher;
use crate::error::AppError;
use crate::extractors::AuthUser;
use crate::model::{TokenRequest, TokenResponse, UserCreate};
use crate::service::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

fn validate_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    if value.len() < min || value.len() > max {
        return Err(AppError::BadRequest(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<UserCreate>,
) -> Result<impl IntoResponse, AppError> {
    validate_length("username", &req.username, 3, 50)?;
    validate_length("email", &req.email, 5, 100)?;
    validate_length("password", &req.password, 8, 72)?;

    let password_hash = PasswordHasher::hash(&req.password)?;
    let mut conn = state.store.connect().await?;
    let user = UserService::create(&mut conn, &req.username, &req.email, &password_hash).await?;
    tracing::info!(username = %user.username, "user registered");
    Ok((StatusCode::CREATED, Json(user)))
}

/// OAuth2-style password grant: form-encoded credentials in, bearer token out.
pub async fn token(
    State(state): State<AppState>,
    Form(req): Form<TokenRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.connect().await?;
    let user = UserService::find_by_username(&mut conn, &req.username)
        .await?
        .ok_or_else(|| AppError::Unauthorized("invalid credentials".into()))?;
    if !PasswordHasher::verify(&req.password, &user.password_hash) {
        return Err(AppError::Unauthorized("invalid credentials".into()));
    }
    let access_token = state.tokens.issue(&user.username)?;
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

/// Who the presented token belongs to. 401 when the subject no longer exists.
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.store.connect().await?;
    let user = UserService::find_by_username(&mut conn, &auth.username)
        .await?
        .ok_or_else(|| AppError::Unauthorized("unknown subject".into()))?;
    Ok(Json(user))
}
