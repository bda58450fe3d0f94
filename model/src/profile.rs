//! Models for profiles and the public profile payload.

use chrono::{DateTime, Utc};
use entitlements::domain::model::Entitlements;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{faq::PublicFaq, link::PublicLink, photo::PublicPhoto, product::PublicProduct};

/// A profile row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    /// The unique lowercase handle the public page is served under
    pub handle: String,
    /// The owner's email, used for the passwordless login
    pub email: String,
    pub display_name: String,
    pub bio: String,
    /// International number without the leading plus, as used by wa.me
    pub whatsapp_number: Option<String>,
    /// Object key of the avatar image, if one was uploaded
    pub avatar_key: Option<String>,
    /// The subscription plan the profile is assigned to
    pub plan_id: Option<i64>,
    /// Unpublished profiles are only visible to their owner
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// The WhatsApp deep link for the profile's contact button
    pub fn whatsapp_link(&self) -> Option<String> {
        self.whatsapp_number
            .as_deref()
            .map(|number| format!("https://wa.me/{number}"))
    }
}

/// Request body to create a profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct CreateProfileRequest {
    pub handle: String,
    pub email: String,
    #[builder(default)]
    #[serde(default)]
    pub display_name: Option<String>,
    pub plan_id: i64,
}

/// Request body to update a profile; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Any common formatting is accepted and normalized to digits
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
    /// Id of an already uploaded photo to use as the avatar
    #[serde(default)]
    pub avatar_photo_id: Option<Uuid>,
}

/// The public payload served for a profile page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicProfileResponse {
    pub handle: String,
    pub display_name: String,
    pub bio: String,
    /// Presigned URL for the avatar image
    pub avatar_url: Option<String>,
    /// wa.me deep link for the contact button
    pub whatsapp_link: Option<String>,
    pub links: Vec<PublicLink>,
    pub photos: Vec<PublicPhoto>,
    pub products: Vec<PublicProduct>,
    pub faqs: Vec<PublicFaq>,
    /// The effective capability set the page is rendered against
    pub entitlements: Entitlements,
}
