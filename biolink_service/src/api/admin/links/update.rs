use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{
    auth::OwnerContext,
    link::{Link, UpdateLinkRequest},
};
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    patch,
    path = "/admin/links/{link_id}",
    params(
        ("link_id" = Uuid, Path, description = "The link to update")
    ),
    request_body = UpdateLinkRequest,
    responses(
        (status = 200, description = "The updated link", body = Link),
        (status = 401, description = "Unauthorized", body = String),
        (status = 404, description = "The link does not belong to the caller", body = String)
    ),
    tag = "links"
)]
#[tracing::instrument(skip(context, owner, request), fields(profile_id = %owner.profile_id))]
pub async fn update_link(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Path(link_id): Path<Uuid>,
    Json(request): Json<UpdateLinkRequest>,
) -> Result<Json<Link>, Response> {
    let link = context
        .db
        .update_link(owner.profile_id, link_id, &request)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to update link");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    Ok(Json(link))
}
