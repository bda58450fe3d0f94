//! Implementation for the entitlements repositories using pgpool


use anyhow::Context;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    model::{EntitlementsError, GrantedModule, PlanLimits, PlanLimitsLookup},
    port::{ModuleGrantRepository, PlanLimitsRepository},
};

/// The EntitlementsDb struct is a wrapper around sqlx::PgPool for the two
/// entitlements lookups.
#[derive(Debug, Clone)]
pub struct EntitlementsDb {
    /// The underlying sqlx::PgPool
    pool: PgPool,
}

impl EntitlementsDb {
    /// Create a new instance of EntitlementsDb
    pub fn new(pool: PgPool) -> EntitlementsDb {
        EntitlementsDb { pool }
    }
}

// The profile row is fetched through a left join, so the plan columns are
// nullable and a fully null set means the profile has no resolvable plan.
#[derive(Debug, sqlx::FromRow)]
struct PlanLimitsRow {
    max_links: Option<i32>,
    max_photos: Option<i32>,
    max_faqs: Option<i32>,
    can_use_vcard: Option<bool>,
}

impl PlanLimitsRow {
    fn into_lookup(self) -> PlanLimitsLookup {
        match (
            self.max_links,
            self.max_photos,
            self.max_faqs,
            self.can_use_vcard,
        ) {
            (Some(max_links), Some(max_photos), Some(max_faqs), Some(can_use_vcard)) => {
                PlanLimitsLookup::Found(PlanLimits {
                    max_links,
                    max_photos,
                    max_faqs,
                    can_use_vcard,
                })
            }
            _ => PlanLimitsLookup::PlanMissing,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct GrantRow {
    module_code: String,
    effects: serde_json::Value,
    expires_at: Option<DateTime<Utc>>,
}

impl PlanLimitsRepository for EntitlementsDb {
    #[tracing::instrument(skip(self))]
    async fn plan_limits_for_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<PlanLimitsLookup, EntitlementsError> {
        let row = sqlx::query_as::<_, PlanLimitsRow>(
            r#"
                SELECT pl.max_links, pl.max_photos, pl.max_faqs, pl.can_use_vcard
                FROM profiles p
                LEFT JOIN plans pl ON pl.id = p.plan_id
                WHERE p.id = $1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
        .context("could not fetch plan limits")?;

        Ok(match row {
            Some(row) => row.into_lookup(),
            None => PlanLimitsLookup::ProfileMissing,
        })
    }
}

impl ModuleGrantRepository for EntitlementsDb {
    #[tracing::instrument(skip(self))]
    async fn active_grants_for_profile(
        &self,
        profile_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<GrantedModule>, EntitlementsError> {
        let rows = sqlx::query_as::<_, GrantRow>(
            r#"
                SELECT g.module_code, m.effects, g.expires_at
                FROM module_grants g
                JOIN modules m ON m.code = g.module_code
                WHERE g.profile_id = $1
                  AND m.is_active
                  AND (g.expires_at IS NULL OR g.expires_at > $2)
            "#,
        )
        .bind(profile_id)
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .context("could not fetch module grants")?;

        Ok(rows
            .into_iter()
            .map(|row| GrantedModule {
                module_code: row.module_code,
                effects: row.effects,
                expires_at: row.expires_at,
            })
            .collect())
    }
}
