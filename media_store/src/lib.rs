mod delete;
mod get;
mod put;

/// How long a presigned upload URL stays usable
pub const UPLOAD_URL_TTL_SECONDS: u64 = 15 * 60;

/// How long the image URLs embedded in API responses stay usable
pub const VIEW_URL_TTL_SECONDS: u64 = 60 * 60;

/// The bucket holding avatars, gallery photos and product images. All keys
/// are namespaced under the owning profile id.
#[derive(Clone, Debug)]
pub struct MediaStore {
    inner: aws_sdk_s3::Client,
    bucket: String,
}

impl MediaStore {
    pub fn new(inner: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { inner, bucket }
    }

    /// Generates a presigned PUT URL the client uploads the image bytes to.
    #[tracing::instrument(skip(self))]
    pub async fn presigned_upload_url(
        &self,
        key: &str,
        content_type: &str,
        duration_seconds: u64,
    ) -> anyhow::Result<String> {
        put::presigned_upload_url(&self.inner, &self.bucket, key, content_type, duration_seconds)
            .await
    }

    /// Generates a presigned GET URL for serving the stored image.
    #[tracing::instrument(skip(self))]
    pub async fn presigned_view_url(
        &self,
        key: &str,
        duration_seconds: u64,
    ) -> anyhow::Result<String> {
        get::presigned_view_url(&self.inner, &self.bucket, key, duration_seconds).await
    }

    /// Deletes the stored object for the provided key.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, key: &str) -> anyhow::Result<()> {
        delete::delete(&self.inner, &self.bucket, key).await
    }
}
