use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::response::EmptyResponse;

use crate::api::context::ApiContext;

#[utoipa::path(
    delete,
    path = "/superadmin/modules/{module_code}",
    params(
        ("module_code" = String, Path, description = "The module to deactivate")
    ),
    responses(
        (status = 200, description = "The module was deactivated, its grants stop contributing", body = EmptyResponse),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String),
        (status = 404, description = "The module does not exist", body = String)
    ),
    tag = "modules"
)]
#[tracing::instrument(skip(context))]
pub async fn deactivate_module(
    State(context): State<ApiContext>,
    Path(module_code): Path<String>,
) -> Result<Json<EmptyResponse>, Response> {
    let deactivated = context
        .db
        .deactivate_module(&module_code)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to deactivate module");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    if !deactivated {
        return Err((StatusCode::NOT_FOUND, "not found").into_response());
    }

    Ok(Json(EmptyResponse::default()))
}
