use axum::{
    Router,
    routing::{get, patch},
};

use crate::api::context::ApiContext;

pub mod create;
pub mod deactivate;
pub mod list;
pub mod update;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list::list_plans).post(create::create_plan))
        .route(
            "/:plan_id",
            patch(update::update_plan).delete(deactivate::deactivate_plan),
        )
}
