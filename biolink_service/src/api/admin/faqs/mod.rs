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
        .route("/", get(list::list_faqs).post(create::create_faq))
        .route(
            "/:faq_id",
            patch(update::update_faq).delete(delete::delete_faq),
        )
}
