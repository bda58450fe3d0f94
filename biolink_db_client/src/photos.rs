use anyhow::Result;
use model::photo::Photo;
use uuid::Uuid;

use crate::db::BiolinkDb;

impl BiolinkDb {
    #[tracing::instrument(skip(self))]
    pub async fn list_photos(&self, profile_id: Uuid) -> Result<Vec<Photo>> {
        let photos = sqlx::query_as::<_, Photo>(
            r#"
SELECT id, profile_id, object_key, caption, position, uploaded, created_at
FROM photos
WHERE profile_id = $1
ORDER BY position, created_at
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(photos)
    }

    /// The photos shown on the public page, pending uploads excluded.
    #[tracing::instrument(skip(self))]
    pub async fn list_uploaded_photos(&self, profile_id: Uuid) -> Result<Vec<Photo>> {
        let photos = sqlx::query_as::<_, Photo>(
            r#"
SELECT id, profile_id, object_key, caption, position, uploaded, created_at
FROM photos
WHERE profile_id = $1 AND uploaded
ORDER BY position, created_at
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(photos)
    }

    /// Counts all photo rows of the profile. A pending upload already
    /// occupies a slot until it is confirmed or deleted.
    #[tracing::instrument(skip(self))]
    pub async fn count_photos(&self, profile_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM photos WHERE profile_id = $1")
            .bind(profile_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_photo(
        &self,
        profile_id: Uuid,
        photo_id: Uuid,
        object_key: &str,
        caption: &str,
    ) -> Result<Photo> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
INSERT INTO photos (id, profile_id, object_key, caption, position)
VALUES ($1, $2, $3, $4, (SELECT COALESCE(MAX(position) + 1, 0) FROM photos WHERE profile_id = $2))
RETURNING id, profile_id, object_key, caption, position, uploaded, created_at
            "#,
        )
        .bind(photo_id)
        .bind(profile_id)
        .bind(object_key)
        .bind(caption)
        .fetch_one(&self.pool)
        .await?;

        Ok(photo)
    }

    #[tracing::instrument(skip(self))]
    pub async fn mark_photo_uploaded(
        &self,
        profile_id: Uuid,
        photo_id: Uuid,
    ) -> Result<Option<Photo>> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
UPDATE photos
SET uploaded = TRUE
WHERE id = $2 AND profile_id = $1
RETURNING id, profile_id, object_key, caption, position, uploaded, created_at
            "#,
        )
        .bind(profile_id)
        .bind(photo_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(photo)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_photo(&self, profile_id: Uuid, photo_id: Uuid) -> Result<Option<Photo>> {
        let photo = sqlx::query_as::<_, Photo>(
            r#"
SELECT id, profile_id, object_key, caption, position, uploaded, created_at
FROM photos
WHERE id = $2 AND profile_id = $1
            "#,
        )
        .bind(profile_id)
        .bind(photo_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(photo)
    }

    /// Deletes a photo and clears any avatar or product image still pointing
    /// at its object key. Returns the object key so the caller can delete the
    /// stored object as well.
    #[tracing::instrument(skip(self))]
    pub async fn delete_photo(&self, profile_id: Uuid, photo_id: Uuid) -> Result<Option<String>> {
        let object_key: Option<String> = sqlx::query_scalar(
            "DELETE FROM photos WHERE id = $2 AND profile_id = $1 RETURNING object_key",
        )
        .bind(profile_id)
        .bind(photo_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(object_key) = &object_key {
            sqlx::query("UPDATE profiles SET avatar_key = NULL WHERE id = $1 AND avatar_key = $2")
                .bind(profile_id)
                .bind(object_key)
                .execute(&self.pool)
                .await?;

            sqlx::query(
                "UPDATE products SET image_key = NULL WHERE profile_id = $1 AND image_key = $2",
            )
            .bind(profile_id)
            .bind(object_key)
            .execute(&self.pool)
            .await?;
        }

        Ok(object_key)
    }
}
