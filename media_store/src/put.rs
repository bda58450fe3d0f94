use std::time::Duration;

use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;

/// Generate a URL for a presigned PUT request. The content type is part of
/// the signature, so the client has to upload with the same one.
pub async fn presigned_upload_url(
    client: &Client,
    bucket: &str,
    key: &str,
    content_type: &str,
    duration_seconds: u64,
) -> anyhow::Result<String> {
    let expires_in = Duration::from_secs(duration_seconds);
    let presigned_request = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .presigned(PresigningConfig::expires_in(expires_in)?)
        .await?;

    Ok(presigned_request.uri().to_string())
}
