use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{
    auth::OwnerContext,
    paths,
    profile::{Profile, UpdateProfileRequest},
};

use crate::api::context::ApiContext;

#[utoipa::path(
    patch,
    path = paths::ADMIN_PROFILE,
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "The updated profile", body = Profile),
        (status = 400, description = "Invalid whatsapp number or avatar photo", body = String),
        (status = 401, description = "Unauthorized", body = String),
        (status = 404, description = "Not found", body = String)
    ),
    tag = "profile"
)]
#[tracing::instrument(skip(context, owner, request), fields(profile_id = %owner.profile_id))]
pub async fn update_profile(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Json(mut request): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, Response> {
    if let Some(number) = request.whatsapp_number.as_deref() {
        let normalized = handle_validator::normalize_whatsapp_number(number).ok_or_else(|| {
            (StatusCode::BAD_REQUEST, "invalid whatsapp number").into_response()
        })?;
        request.whatsapp_number = Some(normalized);
    }

    // The avatar photo must already be confirmed before it can be referenced.
    let avatar_key = match request.avatar_photo_id {
        Some(photo_id) => {
            let photo = context
                .db
                .get_photo(owner.profile_id, photo_id)
                .await
                .map_err(|err| {
                    tracing::error!(error=?err, "failed to fetch avatar photo");
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
                })?
                .filter(|photo| photo.uploaded)
                .ok_or_else(|| {
                    (StatusCode::BAD_REQUEST, "avatar photo is not uploaded").into_response()
                })?;
            Some(photo.object_key)
        }
        None => None,
    };

    let profile = context
        .db
        .update_profile(owner.profile_id, &request)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to update profile");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    let profile = match avatar_key {
        Some(key) => context
            .db
            .set_profile_avatar(owner.profile_id, &key)
            .await
            .map_err(|err| {
                tracing::error!(error=?err, "failed to set avatar");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            })?
            .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?,
        None => profile,
    };

    Ok(Json(profile))
}
