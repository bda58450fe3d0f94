use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{auth::OwnerContext, faq::Faq, paths};

use crate::api::context::ApiContext;

#[utoipa::path(
    get,
    path = paths::ADMIN_FAQS,
    responses(
        (status = 200, description = "All faqs of the caller in position order", body = Vec<Faq>),
        (status = 401, description = "Unauthorized", body = String)
    ),
    tag = "faqs"
)]
#[tracing::instrument(skip(context, owner), fields(profile_id = %owner.profile_id))]
pub async fn list_faqs(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
) -> Result<Json<Vec<Faq>>, Response> {
    let faqs = context
        .db
        .list_faqs(owner.profile_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to list faqs");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    Ok(Json(faqs))
}
