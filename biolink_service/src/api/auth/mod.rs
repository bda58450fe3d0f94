use axum::{Router, routing::post};
use tower::ServiceBuilder;

use crate::api::{context::ApiContext, middleware};

pub mod login;
pub mod request_code;

pub fn router(state: ApiContext) -> Router<ApiContext> {
    Router::new()
        .route(
            "/code",
            post(request_code::request_code).layer(ServiceBuilder::new().layer(
                axum::middleware::from_fn_with_state(state, middleware::rate_limit::handler),
            )),
        )
        .route("/login", post(login::login))
}
