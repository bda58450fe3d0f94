//! Models for profile links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A link row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Link {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub title: String,
    pub url: String,
    /// Position on the public page, lowest first
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body to create a link
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct CreateLinkRequest {
    pub title: String,
    pub url: String,
}

/// Request body to update a link; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateLinkRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Request body to reorder all links of a profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReorderLinksRequest {
    /// Every link id of the profile, in the desired order
    pub link_ids: Vec<Uuid>,
}

/// A link as served on the public page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicLink {
    /// Id used by the click redirect endpoint
    pub id: Uuid,
    pub title: String,
    pub url: String,
}

impl From<Link> for PublicLink {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            title: link.title,
            url: link.url,
        }
    }
}
