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
        .route("/", get(list::list_modules).post(create::create_module))
        .route(
            "/:module_code",
            patch(update::update_module).delete(deactivate::deactivate_module),
        )
}
