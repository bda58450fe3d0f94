use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entitlements::domain::port::EntitlementsService;
use model::{
    auth::OwnerContext,
    link::{CreateLinkRequest, Link},
    paths,
};

use crate::api::{context::ApiContext, map_entitlements_error};

#[utoipa::path(
    post,
    path = paths::ADMIN_LINKS,
    request_body = CreateLinkRequest,
    responses(
        (status = 201, description = "The created link", body = Link),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The link quota of the profile's entitlements is used up", body = String)
    ),
    tag = "links"
)]
#[tracing::instrument(skip(context, owner, request), fields(profile_id = %owner.profile_id))]
pub async fn create_link(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Json(request): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<Link>), Response> {
    let entitlements = context
        .entitlements
        .resolve_entitlements(owner.profile_id)
        .await
        .map_err(map_entitlements_error)?;

    let count = context
        .db
        .count_links(owner.profile_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to count links");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    if count + 1 > entitlements.max_links {
        return Err((StatusCode::FORBIDDEN, "QUOTA_EXCEEDED").into_response());
    }

    let link = context
        .db
        .create_link(owner.profile_id, &request)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to create link");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    Ok((StatusCode::CREATED, Json(link)))
}
