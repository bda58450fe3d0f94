use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::response::EmptyResponse;
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    delete,
    path = "/superadmin/profiles/{profile_id}/modules/{module_code}",
    params(
        ("profile_id" = Uuid, Path, description = "The profile losing the grant"),
        ("module_code" = String, Path, description = "The module to revoke")
    ),
    responses(
        (status = 200, description = "The grant was removed", body = EmptyResponse),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String),
        (status = 404, description = "No grant exists for the profile and module", body = String)
    ),
    tag = "profiles"
)]
#[tracing::instrument(skip(context))]
pub async fn revoke_module(
    State(context): State<ApiContext>,
    Path((profile_id, module_code)): Path<(Uuid, String)>,
) -> Result<Json<EmptyResponse>, Response> {
    let revoked = context
        .db
        .revoke_grant(profile_id, &module_code)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to revoke module");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    if !revoked {
        return Err((StatusCode::NOT_FOUND, "not found").into_response());
    }

    tracing::info!(profile_id = %profile_id, module_code = %module_code, "module revoked");

    Ok(Json(EmptyResponse::default()))
}
