use anyhow::Result;
use model::link::{CreateLinkRequest, Link, UpdateLinkRequest};
use uuid::Uuid;

use crate::db::BiolinkDb;

impl BiolinkDb {
    #[tracing::instrument(skip(self))]
    pub async fn list_links(&self, profile_id: Uuid) -> Result<Vec<Link>> {
        let links = sqlx::query_as::<_, Link>(
            r#"
SELECT id, profile_id, title, url, position, created_at, updated_at
FROM links
WHERE profile_id = $1
ORDER BY position, created_at
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }

    #[tracing::instrument(skip(self))]
    pub async fn count_links(&self, profile_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE profile_id = $1")
            .bind(profile_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn create_link(
        &self,
        profile_id: Uuid,
        request: &CreateLinkRequest,
    ) -> Result<Link> {
        let link = sqlx::query_as::<_, Link>(
            r#"
INSERT INTO links (id, profile_id, title, url, position)
VALUES ($1, $2, $3, $4, (SELECT COALESCE(MAX(position) + 1, 0) FROM links WHERE profile_id = $2))
RETURNING id, profile_id, title, url, position, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(profile_id)
        .bind(&request.title)
        .bind(&request.url)
        .fetch_one(&self.pool)
        .await?;

        Ok(link)
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn update_link(
        &self,
        profile_id: Uuid,
        link_id: Uuid,
        request: &UpdateLinkRequest,
    ) -> Result<Option<Link>> {
        let link = sqlx::query_as::<_, Link>(
            r#"
UPDATE links
SET title = COALESCE($3, title),
    url = COALESCE($4, url),
    updated_at = NOW()
WHERE id = $2 AND profile_id = $1
RETURNING id, profile_id, title, url, position, created_at, updated_at
            "#,
        )
        .bind(profile_id)
        .bind(link_id)
        .bind(&request.title)
        .bind(&request.url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_link(&self, profile_id: Uuid, link_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM links WHERE id = $2 AND profile_id = $1")
            .bind(profile_id)
            .bind(link_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Rewrites the positions of the given links to their order in the slice.
    /// Returns the number of links that were repositioned; ids not belonging
    /// to the profile are ignored.
    #[tracing::instrument(skip(self, link_ids))]
    pub async fn reorder_links(&self, profile_id: Uuid, link_ids: &[Uuid]) -> Result<u64> {
        let result = sqlx::query(
            r#"
UPDATE links
SET position = ord.position, updated_at = NOW()
FROM (
    SELECT id, (ordinality - 1)::int AS position
    FROM unnest($2::uuid[]) WITH ORDINALITY AS t (id, ordinality)
) ord
WHERE links.id = ord.id AND links.profile_id = $1
            "#,
        )
        .bind(profile_id)
        .bind(link_ids)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Looks up a link for the public click redirect. Links of unpublished
    /// profiles are treated as missing.
    #[tracing::instrument(skip(self))]
    pub async fn get_link_for_redirect(&self, link_id: Uuid) -> Result<Option<Link>> {
        let link = sqlx::query_as::<_, Link>(
            r#"
SELECT l.id, l.profile_id, l.title, l.url, l.position, l.created_at, l.updated_at
FROM links l
JOIN profiles p ON p.id = l.profile_id
WHERE l.id = $1 AND p.is_published
            "#,
        )
        .bind(link_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }
}
