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
    path = "/admin/links/{link_id}",
    params(
        ("link_id" = Uuid, Path, description = "The link to delete")
    ),
    responses(
        (status = 200, description = "The link was deleted", body = EmptyResponse),
        (status = 401, description = "Unauthorized", body = String),
        (status = 404, description = "The link does not belong to the caller", body = String)
    ),
    tag = "links"
)]
#[tracing::instrument(skip(context, owner), fields(profile_id = %owner.profile_id))]
pub async fn delete_link(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Path(link_id): Path<Uuid>,
) -> Result<Json<EmptyResponse>, Response> {
    let deleted = context
        .db
        .delete_link(owner.profile_id, link_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to delete link");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "not found").into_response());
    }

    Ok(Json(EmptyResponse::default()))
}
