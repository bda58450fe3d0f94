use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use biolink_auth::{login_code::hash_login_code, token::issue_access_token};
use model::{
    auth::{AccessTokenResponse, LoginRequest, Role},
    paths,
};
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    post,
    path = paths::AUTH_LOGIN,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "The access token for the admin endpoints", body = AccessTokenResponse),
        (status = 401, description = "The code is wrong, expired or already used", body = String)
    ),
    tag = "auth"
)]
#[tracing::instrument(skip(context, request))]
pub async fn login(
    State(context): State<ApiContext>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AccessTokenResponse>, Response> {
    let email = handle_validator::normalize_email(&request.email);

    // Consuming marks the code row used, a second exchange fails.
    let consumed = context
        .db
        .consume_login_code(&email, &hash_login_code(&request.code))
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to consume login code");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;
    if !consumed {
        return Err((StatusCode::UNAUTHORIZED, "invalid code").into_response());
    }

    let profile = context
        .db
        .get_profile_by_email(&email)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to look up profile");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;
    let is_super_admin = context.db.is_super_admin(&email).await.map_err(|err| {
        tracing::error!(error=?err, "failed to look up super admin");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;

    let role = if is_super_admin {
        Role::SuperAdmin
    } else {
        Role::Owner
    };
    let profile_id = match &profile {
        Some(profile) => profile.id,
        // Super admins do not need a profile of their own.
        None if is_super_admin => Uuid::nil(),
        None => return Err((StatusCode::UNAUTHORIZED, "invalid code").into_response()),
    };

    let access_token =
        issue_access_token(&context.auth_keys, profile_id, &email, &role.to_string()).map_err(
            |err| {
                tracing::error!(error=?err, "failed to issue access token");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            },
        )?;

    Ok(Json(AccessTokenResponse { access_token }))
}
