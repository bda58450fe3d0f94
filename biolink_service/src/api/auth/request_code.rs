use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use biolink_auth::login_code::{LOGIN_CODE_TTL_MINUTES, generate_login_code, hash_login_code};
use model::{auth::RequestCodeRequest, paths, response::EmptyResponse};

use crate::api::context::ApiContext;

#[utoipa::path(
    post,
    path = paths::AUTH_CODE,
    request_body = RequestCodeRequest,
    responses(
        (status = 200, description = "A code was emailed if the email belongs to an account", body = EmptyResponse),
        (status = 400, description = "Invalid email", body = String),
        (status = 429, description = "Too many codes requested", body = String)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(context, request))]
pub async fn request_code(
    State(context): State<ApiContext>,
    Json(request): Json<RequestCodeRequest>,
) -> Result<Json<EmptyResponse>, Response> {
    if !handle_validator::is_valid_email(&request.email) {
        return Err((StatusCode::BAD_REQUEST, "invalid email").into_response());
    }
    let email = handle_validator::normalize_email(&request.email);

    let has_profile = context
        .db
        .get_profile_by_email(&email)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to look up profile");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .is_some();
    let is_super_admin = context.db.is_super_admin(&email).await.map_err(|err| {
        tracing::error!(error=?err, "failed to look up super admin");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;

    // Whether the email belongs to an account is not revealed to the caller.
    if !has_profile && !is_super_admin {
        return Ok(Json(EmptyResponse::default()));
    }

    let code = generate_login_code();
    let expires_at = chrono::Utc::now() + chrono::Duration::minutes(LOGIN_CODE_TTL_MINUTES);
    context
        .db
        .create_login_code(&email, &hash_login_code(&code), expires_at)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to store login code");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    context
        .mailer
        .send_login_code(&email, &code)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to send login code email");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    Ok(Json(EmptyResponse::default()))
}
