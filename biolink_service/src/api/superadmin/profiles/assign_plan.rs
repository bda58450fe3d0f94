use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{plan::AssignPlanRequest, profile::Profile};
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    put,
    path = "/superadmin/profiles/{profile_id}/plan",
    params(
        ("profile_id" = Uuid, Path, description = "The profile to move to another plan")
    ),
    request_body = AssignPlanRequest,
    responses(
        (status = 200, description = "The profile on its new plan", body = Profile),
        (status = 400, description = "The plan does not exist or is deactivated", body = String),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String),
        (status = 404, description = "The profile does not exist", body = String)
    ),
    tag = "profiles"
)]
#[tracing::instrument(skip(context, request))]
pub async fn assign_plan(
    State(context): State<ApiContext>,
    Path(profile_id): Path<Uuid>,
    Json(request): Json<AssignPlanRequest>,
) -> Result<Json<Profile>, Response> {
    // Deactivated plans stay valid for the profiles already on them but can
    // no longer be assigned.
    context
        .db
        .get_plan(request.plan_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to fetch plan");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .filter(|plan| plan.is_active)
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "invalid plan").into_response())?;

    let profile = context
        .db
        .set_profile_plan(profile_id, request.plan_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to assign plan");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    tracing::info!(profile_id = %profile.id, plan_id = request.plan_id, "plan assigned");

    Ok(Json(profile))
}
