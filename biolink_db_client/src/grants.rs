use anyhow::Result;
use chrono::{DateTime, Utc};
use model::module::ModuleGrant;
use uuid::Uuid;

use crate::db::BiolinkDb;

impl BiolinkDb {
    #[tracing::instrument(skip(self))]
    pub async fn list_grants(&self, profile_id: Uuid) -> Result<Vec<ModuleGrant>> {
        let grants = sqlx::query_as::<_, ModuleGrant>(
            r#"
SELECT profile_id, module_code, expires_at, granted_at
FROM module_grants
WHERE profile_id = $1
ORDER BY module_code
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(grants)
    }

    /// Grants a module to a profile. Granting an already granted module
    /// refreshes both the expiry and the grant timestamp.
    #[tracing::instrument(skip(self))]
    pub async fn upsert_grant(
        &self,
        profile_id: Uuid,
        module_code: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<ModuleGrant> {
        let grant = sqlx::query_as::<_, ModuleGrant>(
            r#"
INSERT INTO module_grants (profile_id, module_code, expires_at)
VALUES ($1, $2, $3)
ON CONFLICT (profile_id, module_code)
DO UPDATE SET expires_at = EXCLUDED.expires_at, granted_at = NOW()
RETURNING profile_id, module_code, expires_at, granted_at
            "#,
        )
        .bind(profile_id)
        .bind(module_code)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(grant)
    }

    #[tracing::instrument(skip(self))]
    pub async fn revoke_grant(&self, profile_id: Uuid, module_code: &str) -> Result<bool> {
        let result =
            sqlx::query("DELETE FROM module_grants WHERE profile_id = $1 AND module_code = $2")
                .bind(profile_id)
                .bind(module_code)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}
