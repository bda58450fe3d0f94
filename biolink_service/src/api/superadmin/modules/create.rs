use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{
    module::{CreateModuleRequest, Module},
    paths,
};

use crate::api::context::ApiContext;

#[utoipa::path(
    post,
    path = paths::SUPERADMIN_MODULES,
    request_body = CreateModuleRequest,
    responses(
        (status = 201, description = "The created module", body = Module),
        (status = 400, description = "The request is invalid", body = String),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String),
        (status = 409, description = "The module code is already in use", body = String)
    ),
    tag = "modules"
)]
#[tracing::instrument(skip(context, request))]
pub async fn create_module(
    State(context): State<ApiContext>,
    Json(request): Json<CreateModuleRequest>,
) -> Result<(StatusCode, Json<Module>), Response> {
    if request.code.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "invalid module code").into_response());
    }
    if request.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "invalid name").into_response());
    }
    // The resolver reads effects as a key to value map, anything else would
    // be skipped on every resolution.
    if !request.effects.is_object() {
        return Err((StatusCode::BAD_REQUEST, "invalid effects payload").into_response());
    }

    let module = context.db.create_module(&request).await.map_err(|err| {
        if err
            .downcast_ref::<sqlx::Error>()
            .and_then(|err| err.as_database_error())
            .is_some_and(|err| err.is_unique_violation())
        {
            return (StatusCode::CONFLICT, "module code already in use").into_response();
        }
        tracing::error!(error=?err, "failed to create module");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;

    Ok((StatusCode::CREATED, Json(module)))
}
