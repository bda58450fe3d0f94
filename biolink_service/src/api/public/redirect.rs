use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    get,
    path = "/r/{link_id}",
    params(
        ("link_id" = Uuid, Path, description = "The link id from the public page payload")
    ),
    responses(
        (status = 307, description = "Redirects to the link target"),
        (status = 404, description = "The link does not exist or its profile is unpublished", body = String)
    ),
    tag = "public"
)]
#[tracing::instrument(skip(context))]
pub async fn click_redirect(
    State(context): State<ApiContext>,
    Path(link_id): Path<Uuid>,
) -> Result<Redirect, Response> {
    let link = context
        .db
        .get_link_for_redirect(link_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to fetch link");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    // A failed counter write must not break the redirect.
    if let Err(err) = context.db.record_link_click(link.id).await {
        tracing::warn!(error=?err, "failed to record link click");
    }

    Ok(Redirect::temporary(&link.url))
}
