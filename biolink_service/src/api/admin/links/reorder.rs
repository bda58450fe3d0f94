use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{
    auth::OwnerContext,
    link::{Link, ReorderLinksRequest},
};
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    put,
    path = "/admin/links/reorder",
    request_body = ReorderLinksRequest,
    responses(
        (status = 200, description = "The links in their new order", body = Vec<Link>),
        (status = 400, description = "The ids are not a permutation of the profile's links", body = String),
        (status = 401, description = "Unauthorized", body = String)
    ),
    tag = "links"
)]
#[tracing::instrument(skip(context, owner, request), fields(profile_id = %owner.profile_id))]
pub async fn reorder_links(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Json(request): Json<ReorderLinksRequest>,
) -> Result<Json<Vec<Link>>, Response> {
    let current = context
        .db
        .list_links(owner.profile_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to list links");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    // The request must name every link of the profile exactly once.
    let mut requested = request.link_ids.clone();
    requested.sort_unstable();
    requested.dedup();
    let mut existing: Vec<Uuid> = current.iter().map(|link| link.id).collect();
    existing.sort_unstable();
    if requested.len() != request.link_ids.len() || requested != existing {
        return Err((StatusCode::BAD_REQUEST, "invalid link ids").into_response());
    }

    context
        .db
        .reorder_links(owner.profile_id, &request.link_ids)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to reorder links");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    let links = context
        .db
        .list_links(owner.profile_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to list links");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    Ok(Json(links))
}
