use axum::{
    Router,
    routing::{get, put},
};

use crate::api::context::ApiContext;

pub mod assign_plan;
pub mod create;
pub mod grant_module;
pub mod list;
pub mod list_grants;
pub mod revoke_module;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/", get(list::list_profiles).post(create::create_profile))
        .route("/:profile_id/plan", put(assign_plan::assign_plan))
        .route("/:profile_id/modules", get(list_grants::list_grants))
        .route(
            "/:profile_id/modules/:module_code",
            put(grant_module::grant_module).delete(revoke_module::revoke_module),
        )
}
