use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{auth::OwnerContext, paths, product::Product};

use crate::api::context::ApiContext;

#[utoipa::path(
    get,
    path = paths::ADMIN_PRODUCTS,
    responses(
        (status = 200, description = "All products of the caller in position order", body = Vec<Product>),
        (status = 401, description = "Unauthorized", body = String)
    ),
    tag = "products"
)]
#[tracing::instrument(skip(context, owner), fields(profile_id = %owner.profile_id))]
pub async fn list_products(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
) -> Result<Json<Vec<Product>>, Response> {
    let products = context
        .db
        .list_products(owner.profile_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to list products");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    Ok(Json(products))
}
