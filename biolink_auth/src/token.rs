use anyhow::Context;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation, decode};
use uuid::Uuid;

use crate::error::AuthError;

/// The issuer written into and required from every access token
pub static TOKEN_ISSUER: &str = "biolink-api";

/// Access tokens expire after a day; owners sign in again with a fresh code
pub const TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// The claims carried by an access token
#[derive(serde::Serialize, serde::Deserialize, Eq, PartialEq, Debug, Clone)]
pub struct AccessTokenClaims {
    /// The profile the token was issued for
    pub sub: Uuid,
    /// The email the token was issued to
    pub email: String,
    /// The role the token carries, "owner" or "super_admin"
    pub role: String,
    /// The issuer of the token
    pub iss: String,
    /// The unix timestamp the token was issued at
    pub iat: usize,
    /// The unix timestamp the token expires at
    pub exp: usize,
}

/// The symmetric key pair derived from the configured token secret
#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

#[tracing::instrument(skip(keys))]
pub fn issue_access_token(
    keys: &AuthKeys,
    profile_id: Uuid,
    email: &str,
    role: &str,
) -> anyhow::Result<String> {
    let now = chrono::Utc::now().timestamp();

    let claims = AccessTokenClaims {
        sub: profile_id,
        email: email.to_string(),
        role: role.to_string(),
        iss: TOKEN_ISSUER.to_string(),
        iat: now as usize,
        exp: (now + TOKEN_TTL_SECONDS) as usize,
    };

    let header = jsonwebtoken::Header::new(Algorithm::HS256);

    let token = jsonwebtoken::encode(&header, &claims, &keys.encoding)
        .context("failed to encode token")?;

    Ok(token)
}

pub fn decode_access_token(keys: &AuthKeys, token: &str) -> Result<AccessTokenClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);

    validation.leeway = 0;
    validation.set_issuer(&[TOKEN_ISSUER]);

    let decoded = match decode::<AccessTokenClaims>(token, &keys.decoding, &validation) {
        Ok(decoded) => decoded.claims,
        Err(e) => match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                return Err(AuthError::JwtExpired);
            }
            _ => {
                return Err(AuthError::JwtValidationFailed {
                    details: e.to_string(),
                });
            }
        },
    };

    Ok(decoded)
}
