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
    path = "/admin/products/{product_id}",
    params(
        ("product_id" = Uuid, Path, description = "The product to delete")
    ),
    responses(
        (status = 200, description = "The product was deleted", body = EmptyResponse),
        (status = 401, description = "Unauthorized", body = String),
        (status = 404, description = "The product does not belong to the caller", body = String)
    ),
    tag = "products"
)]
#[tracing::instrument(skip(context, owner), fields(profile_id = %owner.profile_id))]
pub async fn delete_product(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Path(product_id): Path<Uuid>,
) -> Result<Json<EmptyResponse>, Response> {
    let deleted = context
        .db
        .delete_product(owner.profile_id, product_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to delete product");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "not found").into_response());
    }

    Ok(Json(EmptyResponse::default()))
}
