use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::module::ModuleGrant;
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    get,
    path = "/superadmin/profiles/{profile_id}/modules",
    params(
        ("profile_id" = Uuid, Path, description = "The profile whose grants to list")
    ),
    responses(
        (status = 200, description = "All grants of the profile including expired ones", body = Vec<ModuleGrant>),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String),
        (status = 404, description = "The profile does not exist", body = String)
    ),
    tag = "profiles"
)]
#[tracing::instrument(skip(context))]
pub async fn list_grants(
    State(context): State<ApiContext>,
    Path(profile_id): Path<Uuid>,
) -> Result<Json<Vec<ModuleGrant>>, Response> {
    context
        .db
        .get_profile(profile_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to fetch profile");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    let grants = context.db.list_grants(profile_id).await.map_err(|err| {
        tracing::error!(error=?err, "failed to list grants");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;

    Ok(Json(grants))
}
