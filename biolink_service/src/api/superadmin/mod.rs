use axum::Router;

use crate::api::context::ApiContext;

pub mod modules;
pub mod plans;
pub mod profiles;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .nest("/plans", plans::router())
        .nest("/modules", modules::router())
        .nest("/profiles", profiles::router())
}
