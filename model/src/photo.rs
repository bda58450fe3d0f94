//! Models for gallery photos and their upload flow.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A photo row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Photo {
    pub id: Uuid,
    pub profile_id: Uuid,
    /// Object key in the media bucket
    pub object_key: String,
    pub caption: String,
    /// Position in the gallery, lowest first
    pub position: i32,
    /// Set once the client confirmed the presigned upload
    pub uploaded: bool,
    pub created_at: DateTime<Utc>,
}

/// Request body to start a photo upload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct CreatePhotoRequest {
    /// Name of the file the client is about to upload
    pub file_name: String,
    #[builder(default)]
    #[serde(default)]
    pub caption: Option<String>,
    /// Overrides the content type derived from the file name
    #[builder(default)]
    #[serde(default)]
    pub content_type: Option<String>,
}

/// The created photo row together with the presigned upload URL
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePhotoResponse {
    pub photo: Photo,
    /// Presigned PUT URL the client uploads the image bytes to
    pub upload_url: String,
}

/// A photo as served on the public page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicPhoto {
    /// Presigned URL for the image
    pub url: String,
    pub caption: String,
}

/// Image types accepted for gallery uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageType {
    /// The mime type sent to the object store for this image type
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
            ImageType::Gif => "image/gif",
            ImageType::Webp => "image/webp",
        }
    }

    /// The canonical extension used for the object key
    pub fn extension(&self) -> &'static str {
        match self {
            ImageType::Jpeg => "jpg",
            ImageType::Png => "png",
            ImageType::Gif => "gif",
            ImageType::Webp => "webp",
        }
    }
}

impl FromStr for ImageType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "gif" => Ok(Self::Gif),
            "webp" => Ok(Self::Webp),
            _ => Err(anyhow::anyhow!("unsupported image type {s}")),
        }
    }
}
