use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{paths, plan::Plan};

use crate::api::context::ApiContext;

#[utoipa::path(
    get,
    path = paths::SUPERADMIN_PLANS,
    responses(
        (status = 200, description = "All plans including deactivated ones", body = Vec<Plan>),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String)
    ),
    tag = "plans"
)]
#[tracing::instrument(skip(context))]
pub async fn list_plans(State(context): State<ApiContext>) -> Result<Json<Vec<Plan>>, Response> {
    let plans = context.db.list_plans().await.map_err(|err| {
        tracing::error!(error=?err, "failed to list plans");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;

    Ok(Json(plans))
}
