use anyhow::Result;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::BiolinkDb;

impl BiolinkDb {
    #[tracing::instrument(skip(self, code_hash))]
    pub async fn create_login_code(
        &self,
        email: &str,
        code_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<()> {
        sqlx::query(
            r#"
INSERT INTO login_codes (id, email, code_hash, expires_at)
VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(code_hash)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Counts the codes requested for an email since the given instant,
    /// consumed or not. Used to rate limit code requests.
    #[tracing::instrument(skip(self))]
    pub async fn count_recent_login_codes(
        &self,
        email: &str,
        since: DateTime<Utc>,
    ) -> Result<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM login_codes WHERE email = $1 AND created_at >= $2",
        )
        .bind(email)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Marks the newest matching unconsumed, unexpired code as consumed.
    /// Returns whether a code was consumed; a second call with the same code
    /// returns false.
    #[tracing::instrument(skip(self, code_hash))]
    pub async fn consume_login_code(&self, email: &str, code_hash: &str) -> Result<bool> {
        let consumed: Option<Uuid> = sqlx::query_scalar(
            r#"
UPDATE login_codes
SET consumed_at = NOW()
WHERE id = (
    SELECT id
    FROM login_codes
    WHERE email = $1 AND code_hash = $2 AND consumed_at IS NULL AND expires_at > NOW()
    ORDER BY created_at DESC
    LIMIT 1
)
RETURNING id
            "#,
        )
        .bind(email)
        .bind(code_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(consumed.is_some())
    }

    #[tracing::instrument(skip(self))]
    pub async fn is_super_admin(&self, email: &str) -> Result<bool> {
        let is_super_admin: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM super_admins WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(is_super_admin)
    }
}
