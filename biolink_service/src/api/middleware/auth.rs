use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use biolink_auth::{
    error::AuthError,
    token::{AccessTokenClaims, decode_access_token},
};
use model::auth::{OwnerContext, Role};

use crate::api::context::ApiContext;

/// Requires a valid access token and attaches the caller as an
/// [OwnerContext] to the request. Super admin tokens pass too, they manage
/// their own profile like any owner.
pub(in crate::api) async fn require_owner(
    State(context): State<ApiContext>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let (claims, role) = decode_caller(&context, req.headers())?;

    req.extensions_mut().insert(OwnerContext {
        profile_id: claims.sub,
        email: claims.email,
        role,
    });

    Ok(next.run(req).await)
}

/// Requires a valid access token carrying the super admin role.
pub(in crate::api) async fn require_super_admin(
    State(context): State<ApiContext>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let (claims, role) = decode_caller(&context, req.headers())?;

    if role != Role::SuperAdmin {
        return Err((StatusCode::FORBIDDEN, "forbidden").into_response());
    }

    req.extensions_mut().insert(OwnerContext {
        profile_id: claims.sub,
        email: claims.email,
        role,
    });

    Ok(next.run(req).await)
}

fn decode_caller(
    context: &ApiContext,
    headers: &HeaderMap,
) -> Result<(AccessTokenClaims, Role), Response> {
    let access_token = match biolink_auth::headers::extract_access_token_from_request_headers(
        headers,
    ) {
        Ok(access_token) => access_token,
        Err(e) => {
            tracing::trace!(error=?e, "unable to get access token");
            return Err((StatusCode::UNAUTHORIZED, "unauthorized").into_response());
        }
    };

    let claims =
        decode_access_token(&context.auth_keys, &access_token).map_err(|e| match e {
            AuthError::JwtExpired => (StatusCode::UNAUTHORIZED, "jwt expired").into_response(),
            _ => {
                tracing::error!(error=?e, "unable to decode jwt");
                (StatusCode::UNAUTHORIZED, "unauthorized").into_response()
            }
        })?;

    let role = claims.role.parse::<Role>().map_err(|err| {
        tracing::error!(error=?err, "access token carries an unknown role");
        (StatusCode::UNAUTHORIZED, "unauthorized").into_response()
    })?;

    Ok((claims, role))
}
