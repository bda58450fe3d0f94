use axum::{Router, routing::get};

use crate::api::context::ApiContext;

pub mod profile;
pub mod redirect;
pub mod vcard;

pub fn profile_router() -> Router<ApiContext> {
    Router::new()
        .route("/:handle", get(profile::get_public_profile))
        .route("/:handle/vcard", get(vcard::get_vcard))
}

pub fn redirect_router() -> Router<ApiContext> {
    Router::new().route("/:link_id", get(redirect::click_redirect))
}
