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
    path = "/superadmin/plans/{plan_id}",
    params(
        ("plan_id" = i64, Path, description = "The plan to deactivate")
    ),
    responses(
        (status = 200, description = "The plan was deactivated, existing profiles keep it", body = EmptyResponse),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String),
        (status = 404, description = "The plan does not exist", body = String)
    ),
    tag = "plans"
)]
#[tracing::instrument(skip(context))]
pub async fn deactivate_plan(
    State(context): State<ApiContext>,
    Path(plan_id): Path<i64>,
) -> Result<Json<EmptyResponse>, Response> {
    let deactivated = context.db.deactivate_plan(plan_id).await.map_err(|err| {
        tracing::error!(error=?err, "failed to deactivate plan");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;

    if !deactivated {
        return Err((StatusCode::NOT_FOUND, "not found").into_response());
    }

    Ok(Json(EmptyResponse::default()))
}
