use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;
use model::auth::RequestCodeRequest;

use crate::{
    api::context::ApiContext,
    constants::{LOGIN_CODE_RATE_LIMIT, LOGIN_CODE_RATE_WINDOW_MINUTES},
};

/// Rate limit for requesting passwordless login codes, counted per email
/// over a sliding window of stored code rows.
#[tracing::instrument(skip(context, req, next))]
pub(in crate::api) async fn handler(
    State(context): State<ApiContext>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let (parts, body) = req.into_parts();

    // this wont work if the body is a long running stream
    let bytes = match body.collect().await {
        Ok(bytes) => bytes.to_bytes(),
        Err(e) => {
            tracing::error!(error=?e, "failed to collect body");
            return Err(StatusCode::INTERNAL_SERVER_ERROR.into_response());
        }
    };

    // An unparseable body is left for the handler to reject.
    if let Ok(request) = serde_json::from_slice::<RequestCodeRequest>(&bytes) {
        let email = handle_validator::normalize_email(&request.email).to_string();

        let since = chrono::Utc::now() - chrono::Duration::minutes(LOGIN_CODE_RATE_WINDOW_MINUTES);
        let count = match context.db.count_recent_login_codes(&email, since).await {
            Ok(count) => count,
            Err(e) => {
                tracing::error!(error=?e, "failed to get rate limit");
                return Err(
                    (StatusCode::INTERNAL_SERVER_ERROR, "failed to get rate limit").into_response()
                );
            }
        };

        if count >= LOGIN_CODE_RATE_LIMIT {
            tracing::error!(
                email = %email,
                count = count,
                rate_limit = LOGIN_CODE_RATE_LIMIT,
                "rate_limit_exceeded"
            );
            return Err((StatusCode::TOO_MANY_REQUESTS, "rate limit exceeded").into_response());
        }
    }

    // reform request
    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}
