use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{
    auth::OwnerContext,
    paths,
    product::{CreateProductRequest, Product},
};

use crate::api::context::ApiContext;

#[utoipa::path(
    post,
    path = paths::ADMIN_PRODUCTS,
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "The created product", body = Product),
        (status = 400, description = "The request is invalid", body = String),
        (status = 401, description = "Unauthorized", body = String)
    ),
    tag = "products"
)]
#[tracing::instrument(skip(context, owner, request), fields(profile_id = %owner.profile_id))]
pub async fn create_product(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), Response> {
    if request.title.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "invalid title").into_response());
    }
    if request.price_cents < 0 {
        return Err((StatusCode::BAD_REQUEST, "invalid price").into_response());
    }

    let product = context
        .db
        .create_product(owner.profile_id, &request)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to create product");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    Ok((StatusCode::CREATED, Json(product)))
}
