//! Models for subscription plans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A plan row; the four limit columns are the base limits every profile on
/// the plan starts from
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub max_links: i32,
    pub max_photos: i32,
    pub max_faqs: i32,
    pub can_use_vcard: bool,
    /// Deactivated plans are kept for existing profiles but hidden from
    /// assignment
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body to create a plan
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct CreatePlanRequest {
    pub name: String,
    #[builder(default)]
    #[serde(default)]
    pub description: Option<String>,
    #[builder(default)]
    #[serde(default)]
    pub price_cents: i32,
    pub max_links: i32,
    pub max_photos: i32,
    pub max_faqs: i32,
    #[builder(default)]
    #[serde(default)]
    pub can_use_vcard: bool,
}

/// Request body to update a plan; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePlanRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_cents: Option<i32>,
    #[serde(default)]
    pub max_links: Option<i32>,
    #[serde(default)]
    pub max_photos: Option<i32>,
    #[serde(default)]
    pub max_faqs: Option<i32>,
    #[serde(default)]
    pub can_use_vcard: Option<bool>,
}

/// Request body to move a profile to another plan
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignPlanRequest {
    pub plan_id: i64,
}
