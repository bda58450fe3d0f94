use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{auth::OwnerContext, link::Link, paths};

use crate::api::context::ApiContext;

#[utoipa::path(
    get,
    path = paths::ADMIN_LINKS,
    responses(
        (status = 200, description = "The profile's links in page order", body = Vec<Link>),
        (status = 401, description = "Unauthorized", body = String)
    ),
    tag = "links"
)]
#[tracing::instrument(skip(context, owner), fields(profile_id = %owner.profile_id))]
pub async fn list_links(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
) -> Result<Json<Vec<Link>>, Response> {
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
