use axum::{Extension, Json, extract::State, response::Response};
use entitlements::domain::{model::Entitlements, port::EntitlementsService};
use model::{auth::OwnerContext, paths};

use crate::api::{context::ApiContext, map_entitlements_error};

#[utoipa::path(
    get,
    path = paths::ADMIN_ENTITLEMENTS,
    responses(
        (status = 200, description = "The effective entitlements of the caller", body = Entitlements),
        (status = 401, description = "Unauthorized", body = String),
        (status = 404, description = "The profile or its plan limits are missing", body = String)
    ),
    tag = "entitlements"
)]
#[tracing::instrument(skip(context, owner), fields(profile_id = %owner.profile_id))]
pub async fn get_entitlements(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
) -> Result<Json<Entitlements>, Response> {
    let entitlements = context
        .entitlements
        .resolve_entitlements(owner.profile_id)
        .await
        .map_err(map_entitlements_error)?;

    Ok(Json(entitlements))
}
