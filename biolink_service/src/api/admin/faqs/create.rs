use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entitlements::domain::port::EntitlementsService;
use model::{
    auth::OwnerContext,
    faq::{CreateFaqRequest, Faq},
    paths,
};

use crate::api::{context::ApiContext, map_entitlements_error};

#[utoipa::path(
    post,
    path = paths::ADMIN_FAQS,
    request_body = CreateFaqRequest,
    responses(
        (status = 201, description = "The created faq", body = Faq),
        (status = 400, description = "The request is invalid", body = String),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The faq quota of the plan is exhausted", body = String)
    ),
    tag = "faqs"
)]
#[tracing::instrument(skip(context, owner, request), fields(profile_id = %owner.profile_id))]
pub async fn create_faq(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Json(request): Json<CreateFaqRequest>,
) -> Result<(StatusCode, Json<Faq>), Response> {
    if request.question.trim().is_empty() || request.answer.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "invalid faq").into_response());
    }

    let entitlements = context
        .entitlements
        .resolve_entitlements(owner.profile_id)
        .await
        .map_err(map_entitlements_error)?;

    let count = context
        .db
        .count_faqs(owner.profile_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to count faqs");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    if count + 1 > entitlements.max_faqs {
        return Err((StatusCode::FORBIDDEN, "QUOTA_EXCEEDED").into_response());
    }

    let faq = context
        .db
        .create_faq(owner.profile_id, &request)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to create faq");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    Ok((StatusCode::CREATED, Json(faq)))
}
