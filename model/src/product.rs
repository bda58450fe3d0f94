//! Models for profile products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A product row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub title: String,
    pub description: String,
    pub price_cents: i32,
    /// ISO 4217 currency code
    pub currency: String,
    /// Outbound link for the buy button
    pub url: Option<String>,
    /// Object key of the product image, if one was attached
    pub image_key: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body to create a product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct CreateProductRequest {
    pub title: String,
    #[builder(default)]
    #[serde(default)]
    pub description: Option<String>,
    pub price_cents: i32,
    #[builder(default)]
    #[serde(default)]
    pub currency: Option<String>,
    #[builder(default)]
    #[serde(default)]
    pub url: Option<String>,
}

/// Request body to update a product; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_cents: Option<i32>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Id of an already uploaded photo to use as the product image
    #[serde(default)]
    pub image_photo_id: Option<Uuid>,
}

/// A product as served on the public page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicProduct {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price_cents: i32,
    pub currency: String,
    pub url: Option<String>,
    /// Presigned URL for the product image
    pub image_url: Option<String>,
}
