use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{auth::OwnerContext, response::EmptyResponse};
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    delete,
    path = "/admin/faqs/{faq_id}",
    params(
        ("faq_id" = Uuid, Path, description = "The faq to delete")
    ),
    responses(
        (status = 200, description = "The faq was deleted", body = EmptyResponse),
        (status = 401, description = "Unauthorized", body = String),
        (status = 404, description = "The faq does not belong to the caller", body = String)
    ),
    tag = "faqs"
)]
#[tracing::instrument(skip(context, owner), fields(profile_id = %owner.profile_id))]
pub async fn delete_faq(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Path(faq_id): Path<Uuid>,
) -> Result<Json<EmptyResponse>, Response> {
    let deleted = context
        .db
        .delete_faq(owner.profile_id, faq_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to delete faq");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "not found").into_response());
    }

    Ok(Json(EmptyResponse::default()))
}
