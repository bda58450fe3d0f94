use anyhow::Result;
use model::faq::{CreateFaqRequest, Faq, UpdateFaqRequest};
use uuid::Uuid;

use crate::db::BiolinkDb;

impl BiolinkDb {
    #[tracing::instrument(skip(self))]
    pub async fn list_faqs(&self, profile_id: Uuid) -> Result<Vec<Faq>> {
        let faqs = sqlx::query_as::<_, Faq>(
            r#"
SELECT id, profile_id, question, answer, position, created_at, updated_at
FROM faqs
WHERE profile_id = $1
ORDER BY position, created_at
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(faqs)
    }

    #[tracing::instrument(skip(self))]
    pub async fn count_faqs(&self, profile_id: Uuid) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM faqs WHERE profile_id = $1")
            .bind(profile_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn create_faq(&self, profile_id: Uuid, request: &CreateFaqRequest) -> Result<Faq> {
        let faq = sqlx::query_as::<_, Faq>(
            r#"
INSERT INTO faqs (id, profile_id, question, answer, position)
VALUES ($1, $2, $3, $4, (SELECT COALESCE(MAX(position) + 1, 0) FROM faqs WHERE profile_id = $2))
RETURNING id, profile_id, question, answer, position, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(profile_id)
        .bind(&request.question)
        .bind(&request.answer)
        .fetch_one(&self.pool)
        .await?;

        Ok(faq)
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn update_faq(
        &self,
        profile_id: Uuid,
        faq_id: Uuid,
        request: &UpdateFaqRequest,
    ) -> Result<Option<Faq>> {
        let faq = sqlx::query_as::<_, Faq>(
            r#"
UPDATE faqs
SET question = COALESCE($3, question),
    answer = COALESCE($4, answer),
    updated_at = NOW()
WHERE id = $2 AND profile_id = $1
RETURNING id, profile_id, question, answer, position, created_at, updated_at
            "#,
        )
        .bind(profile_id)
        .bind(faq_id)
        .bind(&request.question)
        .bind(&request.answer)
        .fetch_optional(&self.pool)
        .await?;

        Ok(faq)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_faq(&self, profile_id: Uuid, faq_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $2 AND profile_id = $1")
            .bind(profile_id)
            .bind(faq_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
