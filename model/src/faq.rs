//! Models for profile FAQ entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A FAQ row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Faq {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub question: String,
    pub answer: String,
    /// Position on the public page, lowest first
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body to create a FAQ entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct CreateFaqRequest {
    pub question: String,
    pub answer: String,
}

/// Request body to update a FAQ entry; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateFaqRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// A FAQ entry as served on the public page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicFaq {
    pub question: String,
    pub answer: String,
}

impl From<Faq> for PublicFaq {
    fn from(faq: Faq) -> Self {
        Self {
            question: faq.question,
            answer: faq.answer,
        }
    }
}
