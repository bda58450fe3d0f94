use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{
    auth::OwnerContext,
    faq::{Faq, UpdateFaqRequest},
};
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    patch,
    path = "/admin/faqs/{faq_id}",
    params(
        ("faq_id" = Uuid, Path, description = "The faq to update")
    ),
    request_body = UpdateFaqRequest,
    responses(
        (status = 200, description = "The updated faq", body = Faq),
        (status = 401, description = "Unauthorized", body = String),
        (status = 404, description = "The faq does not belong to the caller", body = String)
    ),
    tag = "faqs"
)]
#[tracing::instrument(skip(context, owner, request), fields(profile_id = %owner.profile_id))]
pub async fn update_faq(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Path(faq_id): Path<Uuid>,
    Json(request): Json<UpdateFaqRequest>,
) -> Result<Json<Faq>, Response> {
    let faq = context
        .db
        .update_faq(owner.profile_id, faq_id, &request)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to update faq");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    Ok(Json(faq))
}
