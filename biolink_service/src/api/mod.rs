use anyhow::Context;
use axum::{
    Router,
    http::{
        Method, StatusCode,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use entitlements::domain::model::EntitlementsError;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{api::context::ApiContext, constants::ORIGINS};

pub mod admin;
pub mod auth;
pub mod context;
pub mod health;
mod middleware;
pub mod public;
pub mod superadmin;
pub mod swagger;

pub async fn setup_and_serve(state: ApiContext) -> anyhow::Result<()> {
    let cors = cors_layer();

    let port = state.config.port;
    let env = state.config.environment;
    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .merge(health::router())
        .layer(cors)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()));

    let bind_address = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind to address {}", bind_address))?;

    tracing::info!(
        "biolink service is up and running with environment {:?} on port {}",
        &env,
        &port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error running axum server")
}

pub fn api_router(app_state: ApiContext) -> Router {
    Router::new()
        .nest("/auth", auth::router(app_state.clone()))
        .nest("/p", public::profile_router())
        .nest("/r", public::redirect_router())
        .nest(
            "/admin",
            admin::router().layer(axum::middleware::from_fn_with_state(
                app_state.clone(),
                middleware::auth::require_owner,
            )),
        )
        .nest(
            "/superadmin",
            superadmin::router().layer(axum::middleware::from_fn_with_state(
                app_state.clone(),
                middleware::auth::require_super_admin,
            )),
        )
        .with_state(app_state)
}

// allow requests from the biolink web apps
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_credentials(true)
        .allow_headers(vec![AUTHORIZATION, CONTENT_TYPE])
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(ORIGINS)
}

/// Maps resolver failures onto responses. A profile without resolvable plan
/// limits is treated as missing rather than given default limits.
pub(in crate::api) fn map_entitlements_error(err: EntitlementsError) -> Response {
    match err {
        EntitlementsError::ProfileNotFound => {
            (StatusCode::NOT_FOUND, "not found").into_response()
        }
        EntitlementsError::PlanLimitsNotFound => {
            tracing::error!(error=?err, "profile has no resolvable plan limits");
            (StatusCode::NOT_FOUND, "not found").into_response()
        }
        EntitlementsError::StorageLayerError(_) => {
            tracing::error!(error=?err, "failed to resolve entitlements");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}
