use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{
    paths,
    plan::{CreatePlanRequest, Plan},
};

use crate::api::context::ApiContext;

#[utoipa::path(
    post,
    path = paths::SUPERADMIN_PLANS,
    request_body = CreatePlanRequest,
    responses(
        (status = 201, description = "The created plan", body = Plan),
        (status = 400, description = "The request is invalid", body = String),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String)
    ),
    tag = "plans"
)]
#[tracing::instrument(skip(context, request))]
pub async fn create_plan(
    State(context): State<ApiContext>,
    Json(request): Json<CreatePlanRequest>,
) -> Result<(StatusCode, Json<Plan>), Response> {
    if request.name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "invalid name").into_response());
    }
    if request.max_links < 0 || request.max_photos < 0 || request.max_faqs < 0 {
        return Err((StatusCode::BAD_REQUEST, "invalid limits").into_response());
    }

    let plan = context.db.create_plan(&request).await.map_err(|err| {
        tracing::error!(error=?err, "failed to create plan");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;

    Ok((StatusCode::CREATED, Json(plan)))
}
