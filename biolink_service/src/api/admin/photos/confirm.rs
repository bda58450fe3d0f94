use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{auth::OwnerContext, photo::Photo};
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    post,
    path = "/admin/photos/{photo_id}/confirm",
    params(
        ("photo_id" = Uuid, Path, description = "The photo whose upload finished")
    ),
    responses(
        (status = 200, description = "The photo now serves on the public page", body = Photo),
        (status = 401, description = "Unauthorized", body = String),
        (status = 404, description = "The photo does not belong to the caller", body = String)
    ),
    tag = "photos"
)]
#[tracing::instrument(skip(context, owner), fields(profile_id = %owner.profile_id))]
pub async fn confirm_photo(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Path(photo_id): Path<Uuid>,
) -> Result<Json<Photo>, Response> {
    let photo = context
        .db
        .mark_photo_uploaded(owner.profile_id, photo_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to confirm photo");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    Ok(Json(photo))
}
