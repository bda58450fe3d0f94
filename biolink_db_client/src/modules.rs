use anyhow::Result;
use model::module::{CreateModuleRequest, Module, UpdateModuleRequest};

use crate::db::BiolinkDb;

impl BiolinkDb {
    #[tracing::instrument(skip(self))]
    pub async fn list_modules(&self) -> Result<Vec<Module>> {
        let modules = sqlx::query_as::<_, Module>(
            r#"
SELECT code, name, description, effects, is_active, created_at
FROM modules
ORDER BY code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(modules)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_module(&self, code: &str) -> Result<Option<Module>> {
        let module = sqlx::query_as::<_, Module>(
            r#"
SELECT code, name, description, effects, is_active, created_at
FROM modules
WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(module)
    }

    #[tracing::instrument(skip(self, request), fields(code = %request.code))]
    pub async fn create_module(&self, request: &CreateModuleRequest) -> Result<Module> {
        let module = sqlx::query_as::<_, Module>(
            r#"
INSERT INTO modules (code, name, description, effects)
VALUES ($1, $2, $3, $4)
RETURNING code, name, description, effects, is_active, created_at
            "#,
        )
        .bind(&request.code)
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.effects)
        .fetch_one(&self.pool)
        .await?;

        Ok(module)
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn update_module(
        &self,
        code: &str,
        request: &UpdateModuleRequest,
    ) -> Result<Option<Module>> {
        let module = sqlx::query_as::<_, Module>(
            r#"
UPDATE modules
SET name = COALESCE($2, name),
    description = COALESCE($3, description),
    effects = COALESCE($4, effects)
WHERE code = $1
RETURNING code, name, description, effects, is_active, created_at
            "#,
        )
        .bind(code)
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.effects)
        .fetch_optional(&self.pool)
        .await?;

        Ok(module)
    }

    /// Modules are never deleted, only deactivated. Existing grants are kept
    /// but stop contributing to resolved entitlements.
    #[tracing::instrument(skip(self))]
    pub async fn deactivate_module(&self, code: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE modules SET is_active = FALSE WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
