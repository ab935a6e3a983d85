//! Auth handlers — register, login, refresh, logout, me.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use validator::Validate;

use streamhub_auth::allowlist::normalize_email;
use streamhub_core::error::AppError;
use streamhub_entity::user::User;

use crate::dto::request::{LoginRequest, LogoutRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid registration: {e}")))?;

    let min_len = state.config.auth.password_min_length;
    if req.password.chars().count() < min_len {
        return Err(AppError::validation(format!(
            "Password must be at least {min_len} characters"
        ))
        .into());
    }

    let hash = state.password_hasher.hash(&req.password)?;
    let mut user = User::new(req.email.trim(), hash);
    user.display_name = req.display_name;

    let user = state.users.insert(user).await?;
    let role = state.role_resolver.resolve(&user.email);

    tracing::info!(email = %normalize_email(&user.email), "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from_user(&user, role))),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid login request: {e}")))?;

    // One error for both unknown email and bad password: a login probe
    // must not learn which accounts exist.
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::invalid_credential("Invalid email or password"))?;

    if !state.password_hasher.verify(&req.password, &user.password_hash)? {
        return Err(AppError::invalid_credential("Invalid email or password").into());
    }

    state.users.touch_login(user.id).await?;

    let tokens = state.jwt_encoder.generate_token_pair(user.id, &user.email)?;
    let role = state.role_resolver.resolve(&user.email);

    tracing::info!(email = %normalize_email(&user.email), role = %role, "Login succeeded");

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        access_expires_at: tokens.access_expires_at,
        refresh_expires_at: tokens.refresh_expires_at,
        user: UserResponse::from_user(&user, role),
    })))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let claims = state.jwt_decoder.decode_refresh_token(&req.refresh_token).await?;

    let user = state
        .users
        .find_by_id(claims.user_id())
        .await?
        .ok_or_else(|| AppError::invalid_credential("Account no longer exists"))?;

    // Rotate: the used refresh token is retired.
    state.jwt_decoder.revoke(claims.jti).await;

    let tokens = state.jwt_encoder.generate_token_pair(user.id, &user.email)?;
    let role = state.role_resolver.resolve(&user.email);

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        access_expires_at: tokens.access_expires_at,
        refresh_expires_at: tokens.refresh_expires_at,
        user: UserResponse::from_user(&user, role),
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Result<Json<LogoutRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    // The access token is revoked no matter what the body looks like;
    // a missing or malformed body only skips the refresh-token revoke.
    state.jwt_decoder.revoke(auth.jti).await;

    if let Ok(Json(req)) = body
        && let Some(refresh_token) = req.refresh_token
        && let Ok(claims) = state.jwt_decoder.decode_refresh_token(&refresh_token).await
    {
        state.jwt_decoder.revoke(claims.jti).await;
    }

    tracing::info!(email = %normalize_email(&auth.email), "Logged out");

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .users
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::invalid_credential("Account no longer exists"))?;

    Ok(Json(ApiResponse::ok(UserResponse::from_user(
        &user, auth.role,
    ))))
}
