use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::api::context::ApiContext;

pub mod confirm;
pub mod create;
pub mod delete;
pub mod list;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list::list_photos).post(create::create_photo))
        .route("/:photo_id/confirm", post(confirm::confirm_photo))
        .route("/:photo_id", delete(delete::delete_photo))
}
