use crate::error::AuthError;

pub fn extract_access_token_from_request_headers(
    headers: &axum::http::HeaderMap,
) -> Result<String, AuthError> {
    let auth_token_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let Some(auth_token) = auth_token_header else {
        return Err(AuthError::NoAccessTokenProvided);
    };

    let auth_token_parts = auth_token.split("Bearer ").collect::<Vec<&str>>();
    if auth_token_parts.len() != 2 {
        return Err(AuthError::InvalidAuthorizationHeaderFormat);
    }
    tracing::trace!("Authorization header provided");

    Ok(auth_token_parts[1].to_string())
}
