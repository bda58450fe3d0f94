use axum::{Router, routing::get};

use crate::api::context::ApiContext;

pub mod get;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/", get(get::get_entitlements))
}
