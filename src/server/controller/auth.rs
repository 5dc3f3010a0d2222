use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        account::{
            ChangePasswordDto, LoginDto, RegisterDto, RegisterResponseDto, SessionDto, TokenDto,
        },
        api::ErrorDto,
    },
    server::{
        controller::util::current_account::CurrentAccount,
        error::Error,
        model::app::AppState,
        service::account::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created with a first session token", body = RegisterResponseDto),
        (status = 400, description = "Malformed email, name, or password", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let (account, token) = AuthService::new(&state.db, state.session_ttl_days)
        .register(request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseDto { account, token }),
    ))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Session token issued", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let token = AuthService::new(&state.db, state.session_ttl_days)
        .login(request)
        .await?;

    Ok((StatusCode::OK, Json(token)))
}

/// Log out the current session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    current: CurrentAccount,
) -> Result<impl IntoResponse, Error> {
    AuthService::new(&state.db, state.session_ttl_days)
        .logout(&current.session.token)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the current account's sessions
#[utoipa::path(
    get,
    path = "/api/auth/sessions",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Sessions, newest first", body = Vec<SessionDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sessions(
    State(state): State<AppState>,
    current: CurrentAccount,
) -> Result<impl IntoResponse, Error> {
    let sessions = AuthService::new(&state.db, state.session_ttl_days)
        .list_sessions(current.account.id, current.session.id)
        .await?;

    Ok((StatusCode::OK, Json(sessions)))
}

/// Revoke one of the current account's other sessions
#[utoipa::path(
    delete,
    path = "/api/auth/sessions/{id}",
    tag = AUTH_TAG,
    params(("id" = i32, Path, description = "Session ID")),
    responses(
        (status = 204, description = "Session revoked"),
        (status = 400, description = "The current session cannot revoke itself", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Session not found for this account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_session(
    State(state): State<AppState>,
    current: CurrentAccount,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    AuthService::new(&state.db, state.session_ttl_days)
        .revoke_session(current.account.id, session_id, current.session.id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Change the password, rotating every session
#[utoipa::path(
    post,
    path = "/api/auth/password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed; fresh session token issued", body = TokenDto),
        (status = 400, description = "New password too short", body = ErrorDto),
        (status = 401, description = "Current password wrong or not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    current: CurrentAccount,
    Json(request): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, Error> {
    let token = AuthService::new(&state.db, state.session_ttl_days)
        .change_password(current.account.id, request)
        .await?;

    Ok((StatusCode::OK, Json(token)))
}
