use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::plan::{Plan, UpdatePlanRequest};

use crate::api::context::ApiContext;

#[utoipa::path(
    patch,
    path = "/superadmin/plans/{plan_id}",
    params(
        ("plan_id" = i64, Path, description = "The plan to update")
    ),
    request_body = UpdatePlanRequest,
    responses(
        (status = 200, description = "The updated plan", body = Plan),
        (status = 400, description = "The request is invalid", body = String),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String),
        (status = 404, description = "The plan does not exist", body = String)
    ),
    tag = "plans"
)]
#[tracing::instrument(skip(context, request))]
pub async fn update_plan(
    State(context): State<ApiContext>,
    Path(plan_id): Path<i64>,
    Json(request): Json<UpdatePlanRequest>,
) -> Result<Json<Plan>, Response> {
    if request.max_links.is_some_and(|limit| limit < 0)
        || request.max_photos.is_some_and(|limit| limit < 0)
        || request.max_faqs.is_some_and(|limit| limit < 0)
    {
        return Err((StatusCode::BAD_REQUEST, "invalid limits").into_response());
    }

    let plan = context
        .db
        .update_plan(plan_id, &request)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to update plan");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    Ok(Json(plan))
}
