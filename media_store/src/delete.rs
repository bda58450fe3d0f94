use anyhow::Context;
use aws_sdk_s3::Client;

/// Deletes a given item from the bucket
#[tracing::instrument(skip(client))]
pub async fn delete(client: &Client, bucket: &str, key: &str) -> anyhow::Result<()> {
    client
        .delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .context(format!("could not delete item {key} from bucket {bucket}"))?;

    Ok(())
}
