use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::module::{GrantModuleRequest, ModuleGrant};
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    put,
    path = "/superadmin/profiles/{profile_id}/modules/{module_code}",
    params(
        ("profile_id" = Uuid, Path, description = "The profile receiving the grant"),
        ("module_code" = String, Path, description = "The module to grant")
    ),
    request_body = GrantModuleRequest,
    responses(
        (status = 200, description = "The stored grant, granting again refreshes the expiry", body = ModuleGrant),
        (status = 400, description = "The module is deactivated", body = String),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String),
        (status = 404, description = "The profile or module does not exist", body = String)
    ),
    tag = "profiles"
)]
#[tracing::instrument(skip(context, request))]
pub async fn grant_module(
    State(context): State<ApiContext>,
    Path((profile_id, module_code)): Path<(Uuid, String)>,
    Json(request): Json<GrantModuleRequest>,
) -> Result<Json<ModuleGrant>, Response> {
    context
        .db
        .get_profile(profile_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to fetch profile");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    let module = context
        .db
        .get_module(&module_code)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to fetch module");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    if !module.is_active {
        return Err((StatusCode::BAD_REQUEST, "module is not active").into_response());
    }

    let grant = context
        .db
        .upsert_grant(profile_id, &module_code, request.expires_at)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to grant module");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    tracing::info!(profile_id = %profile_id, module_code = %module_code, "module granted");

    Ok(Json(grant))
}
