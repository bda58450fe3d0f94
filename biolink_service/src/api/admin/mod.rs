use axum::Router;

use crate::api::context::ApiContext;

pub mod entitlements;
pub mod faqs;
pub mod links;
pub mod photos;
pub mod products;
pub mod profile;
pub mod stats;

pub fn router() -> Router<ApiContext> {
    Router::new()
        .nest("/profile", profile::router())
        .nest("/links", links::router())
        .nest("/photos", photos::router())
        .nest("/products", products::router())
        .nest("/faqs", faqs::router())
        .nest("/entitlements", entitlements::router())
        .nest("/stats", stats::router())
}
