use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{auth::OwnerContext, paths, photo::Photo};

use crate::api::context::ApiContext;

#[utoipa::path(
    get,
    path = paths::ADMIN_PHOTOS,
    responses(
        (status = 200, description = "The profile's photos, pending uploads included", body = Vec<Photo>),
        (status = 401, description = "Unauthorized", body = String)
    ),
    tag = "photos"
)]
#[tracing::instrument(skip(context, owner), fields(profile_id = %owner.profile_id))]
pub async fn list_photos(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
) -> Result<Json<Vec<Photo>>, Response> {
    let photos = context
        .db
        .list_photos(owner.profile_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to list photos");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    Ok(Json(photos))
}
