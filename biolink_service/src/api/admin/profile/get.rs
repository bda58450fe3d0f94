use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{auth::OwnerContext, paths, profile::Profile};

use crate::api::context::ApiContext;

#[utoipa::path(
    get,
    path = paths::ADMIN_PROFILE,
    responses(
        (status = 200, description = "The caller's profile", body = Profile),
        (status = 401, description = "Unauthorized", body = String),
        (status = 404, description = "Not found", body = String)
    ),
    tag = "profile"
)]
#[tracing::instrument(skip(context, owner), fields(profile_id = %owner.profile_id))]
pub async fn get_profile(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
) -> Result<Json<Profile>, Response> {
    let profile = context
        .db
        .get_profile(owner.profile_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to fetch profile");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    Ok(Json(profile))
}
