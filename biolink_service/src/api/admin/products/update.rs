use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{
    auth::OwnerContext,
    product::{Product, UpdateProductRequest},
};
use uuid::Uuid;

use crate::api::context::ApiContext;

#[utoipa::path(
    patch,
    path = "/admin/products/{product_id}",
    params(
        ("product_id" = Uuid, Path, description = "The product to update")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "The updated product", body = Product),
        (status = 400, description = "The request is invalid", body = String),
        (status = 401, description = "Unauthorized", body = String),
        (status = 404, description = "The product does not belong to the caller", body = String)
    ),
    tag = "products"
)]
#[tracing::instrument(skip(context, owner, request), fields(profile_id = %owner.profile_id))]
pub async fn update_product(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Path(product_id): Path<Uuid>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<Product>, Response> {
    if request.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err((StatusCode::BAD_REQUEST, "invalid title").into_response());
    }
    if request.price_cents.is_some_and(|p| p < 0) {
        return Err((StatusCode::BAD_REQUEST, "invalid price").into_response());
    }

    let mut image_key = None;
    if let Some(photo_id) = request.image_photo_id {
        // The image photo must already be confirmed before it can be referenced.
        let photo = context
            .db
            .get_photo(owner.profile_id, photo_id)
            .await
            .map_err(|err| {
                tracing::error!(error=?err, "failed to fetch photo");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            })?
            .filter(|photo| photo.uploaded)
            .ok_or_else(|| {
                (StatusCode::BAD_REQUEST, "product image is not uploaded").into_response()
            })?;
        image_key = Some(photo.object_key);
    }

    let product = context
        .db
        .update_product(owner.profile_id, product_id, &request)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to update product");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    let product = match image_key {
        Some(key) => context
            .db
            .set_product_image(owner.profile_id, product_id, &key)
            .await
            .map_err(|err| {
                tracing::error!(error=?err, "failed to set product image");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            })?
            .unwrap_or(product),
        None => product,
    };

    Ok(Json(product))
}
