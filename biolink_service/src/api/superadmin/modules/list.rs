use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{module::Module, paths};

use crate::api::context::ApiContext;

#[utoipa::path(
    get,
    path = paths::SUPERADMIN_MODULES,
    responses(
        (status = 200, description = "All modules including deactivated ones", body = Vec<Module>),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String)
    ),
    tag = "modules"
)]
#[tracing::instrument(skip(context))]
pub async fn list_modules(
    State(context): State<ApiContext>,
) -> Result<Json<Vec<Module>>, Response> {
    let modules = context.db.list_modules().await.map_err(|err| {
        tracing::error!(error=?err, "failed to list modules");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;

    Ok(Json(modules))
}
