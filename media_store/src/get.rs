use std::time::Duration;

use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;

/// Generate a URL for a presigned GET request.
pub async fn presigned_view_url(
    client: &Client,
    bucket: &str,
    key: &str,
    duration_seconds: u64,
) -> anyhow::Result<String> {
    let expires_in = Duration::from_secs(duration_seconds);
    let presigned_request = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .presigned(PresigningConfig::expires_in(expires_in)?)
        .await?;

    Ok(presigned_request.uri().to_string())
}
