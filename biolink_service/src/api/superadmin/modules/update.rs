use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::module::{Module, UpdateModuleRequest};

use crate::api::context::ApiContext;

#[utoipa::path(
    patch,
    path = "/superadmin/modules/{module_code}",
    params(
        ("module_code" = String, Path, description = "The module to update")
    ),
    request_body = UpdateModuleRequest,
    responses(
        (status = 200, description = "The updated module", body = Module),
        (status = 400, description = "The request is invalid", body = String),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String),
        (status = 404, description = "The module does not exist", body = String)
    ),
    tag = "modules"
)]
#[tracing::instrument(skip(context, request))]
pub async fn update_module(
    State(context): State<ApiContext>,
    Path(module_code): Path<String>,
    Json(request): Json<UpdateModuleRequest>,
) -> Result<Json<Module>, Response> {
    if request
        .effects
        .as_ref()
        .is_some_and(|effects| !effects.is_object())
    {
        return Err((StatusCode::BAD_REQUEST, "invalid effects payload").into_response());
    }

    let module = context
        .db
        .update_module(&module_code, &request)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to update module");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    Ok(Json(module))
}
