use axum::{
    Router,
    routing::{get, patch, put},
};

use crate::api::context::ApiContext;

pub mod create;
pub mod delete;
pub mod list;
pub mod reorder;
pub mod update;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list::list_links).post(create::create_link))
        .route("/reorder", put(reorder::reorder_links))
        .route(
            "/:link_id",
            patch(update::update_link).delete(delete::delete_link),
        )
}
