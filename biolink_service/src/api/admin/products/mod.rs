use axum::{
    Router,
    routing::{get, patch},
};

use crate::api::context::ApiContext;

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list::list_products).post(create::create_product))
        .route(
            "/:product_id",
            patch(update::update_product).delete(delete::delete_product),
        )
}
