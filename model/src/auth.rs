//! Models for the passwordless login flow and request identity.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body to have a login code emailed to a profile owner
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RequestCodeRequest {
    /// The email of the profile the caller wants to sign in to
    pub email: String,
}

/// Request body to exchange an emailed login code for an access token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// The email the code was sent to
    pub email: String,
    /// The six digit code from the email
    pub code: String,
}

/// The issued access token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessTokenResponse {
    /// The bearer token for the admin endpoints
    pub access_token: String,
}

/// Roles an access token can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A profile owner
    Owner,
    /// An operator with access to plan and module administration
    SuperAdmin,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Owner => write!(f, "owner"),
            Role::SuperAdmin => write!(f, "super_admin"),
        }
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "super_admin" => Ok(Self::SuperAdmin),
            _ => Err(anyhow::anyhow!("invalid role {s}")),
        }
    }
}

/// The authenticated caller, attached to the request extensions by the auth
/// middleware
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerContext {
    /// The profile the token was issued for
    pub profile_id: Uuid,
    /// The email the token was issued to
    pub email: String,
    /// The role the token carries
    pub role: Role,
}
