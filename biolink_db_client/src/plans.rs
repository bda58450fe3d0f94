use anyhow::Result;
use model::plan::{CreatePlanRequest, Plan, UpdatePlanRequest};

use crate::db::BiolinkDb;

impl BiolinkDb {
    #[tracing::instrument(skip(self))]
    pub async fn list_plans(&self) -> Result<Vec<Plan>> {
        let plans = sqlx::query_as::<_, Plan>(
            r#"
SELECT id, name, description, price_cents, max_links, max_photos, max_faqs, can_use_vcard, is_active, created_at, updated_at
FROM plans
ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(plans)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_plan(&self, plan_id: i64) -> Result<Option<Plan>> {
        let plan = sqlx::query_as::<_, Plan>(
            r#"
SELECT id, name, description, price_cents, max_links, max_photos, max_faqs, can_use_vcard, is_active, created_at, updated_at
FROM plans
WHERE id = $1
            "#,
        )
        .bind(plan_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }

    #[tracing::instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_plan(&self, request: &CreatePlanRequest) -> Result<Plan> {
        let plan = sqlx::query_as::<_, Plan>(
            r#"
INSERT INTO plans (name, description, price_cents, max_links, max_photos, max_faqs, can_use_vcard)
VALUES ($1, $2, $3, $4, $5, $6, $7)
RETURNING id, name, description, price_cents, max_links, max_photos, max_faqs, can_use_vcard, is_active, created_at, updated_at
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.price_cents)
        .bind(request.max_links)
        .bind(request.max_photos)
        .bind(request.max_faqs)
        .bind(request.can_use_vcard)
        .fetch_one(&self.pool)
        .await?;

        Ok(plan)
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn update_plan(
        &self,
        plan_id: i64,
        request: &UpdatePlanRequest,
    ) -> Result<Option<Plan>> {
        let plan = sqlx::query_as::<_, Plan>(
            r#"
UPDATE plans
SET name = COALESCE($2, name),
    description = COALESCE($3, description),
    price_cents = COALESCE($4, price_cents),
    max_links = COALESCE($5, max_links),
    max_photos = COALESCE($6, max_photos),
    max_faqs = COALESCE($7, max_faqs),
    can_use_vcard = COALESCE($8, can_use_vcard),
    updated_at = NOW()
WHERE id = $1
RETURNING id, name, description, price_cents, max_links, max_photos, max_faqs, can_use_vcard, is_active, created_at, updated_at
            "#,
        )
        .bind(plan_id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.price_cents)
        .bind(request.max_links)
        .bind(request.max_photos)
        .bind(request.max_faqs)
        .bind(request.can_use_vcard)
        .fetch_optional(&self.pool)
        .await?;

        Ok(plan)
    }

    /// Plans are never deleted, only deactivated. Profiles keep their
    /// assignment and resolve against the stored limits.
    #[tracing::instrument(skip(self))]
    pub async fn deactivate_plan(&self, plan_id: i64) -> Result<bool> {
        let result =
            sqlx::query("UPDATE plans SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
                .bind(plan_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
