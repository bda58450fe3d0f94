use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{auth::OwnerContext, response::EmptyResponse};
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    delete,
    path = "/admin/photos/{photo_id}",
    params(
        ("photo_id" = Uuid, Path, description = "The photo to delete")
    ),
    responses(
        (status = 200, description = "The photo and its stored object were deleted", body = EmptyResponse),
        (status = 401, description = "Unauthorized", body = String),
        (status = 404, description = "The photo does not belong to the caller", body = String)
    ),
    tag = "photos"
)]
#[tracing::instrument(skip(context, owner), fields(profile_id = %owner.profile_id))]
pub async fn delete_photo(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Path(photo_id): Path<Uuid>,
) -> Result<Json<EmptyResponse>, Response> {
    let photo = context
        .db
        .get_photo(owner.profile_id, photo_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to fetch photo");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    context
        .media
        .delete(&photo.object_key)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to delete stored object");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    // Also clears avatar and product image references to the object key.
    context
        .db
        .delete_photo(owner.profile_id, photo_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to delete photo");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    Ok(Json(EmptyResponse::default()))
}
