use axum::{Router, routing::get};

use crate::api::context::ApiContext;

pub mod get;
pub mod update;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/", get(get::get_profile).patch(update::update_profile))
}
