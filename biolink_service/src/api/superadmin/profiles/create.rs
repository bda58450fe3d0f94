use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use handle_validator::{is_valid_email, is_valid_handle, normalize_email, normalize_handle};
use model::{
    paths,
    profile::{CreateProfileRequest, Profile},
};

use crate::api::context::ApiContext;

#[utoipa::path(
    post,
    path = paths::SUPERADMIN_PROFILES,
    request_body = CreateProfileRequest,
    responses(
        (status = 201, description = "The created profile", body = Profile),
        (status = 400, description = "The request is invalid", body = String),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String),
        (status = 409, description = "The handle or email is already in use", body = String)
    ),
    tag = "profiles"
)]
#[tracing::instrument(skip(context, request))]
pub async fn create_profile(
    State(context): State<ApiContext>,
    Json(request): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<Profile>), Response> {
    let handle = normalize_handle(&request.handle);
    if !is_valid_handle(&handle) {
        return Err((StatusCode::BAD_REQUEST, "invalid handle").into_response());
    }
    let email = normalize_email(&request.email);
    if !is_valid_email(&email) {
        return Err((StatusCode::BAD_REQUEST, "invalid email").into_response());
    }

    let plan = context
        .db
        .get_plan(request.plan_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to fetch plan");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .filter(|plan| plan.is_active)
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "invalid plan").into_response())?;

    let request = CreateProfileRequest {
        handle: handle.into_owned(),
        email: email.into_owned(),
        ..request
    };

    let profile = context.db.create_profile(&request).await.map_err(|err| {
        if err
            .downcast_ref::<sqlx::Error>()
            .and_then(|err| err.as_database_error())
            .is_some_and(|err| err.is_unique_violation())
        {
            return (StatusCode::CONFLICT, "handle or email already in use").into_response();
        }
        tracing::error!(error=?err, "failed to create profile");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;

    tracing::info!(profile_id = %profile.id, plan_id = plan.id, "profile created");

    Ok((StatusCode::CREATED, Json(profile)))
}
