use anyhow::Result;
use chrono::NaiveDate;
use model::stats::{DailyViews, LinkClicks};
use uuid::Uuid;

use crate::db::BiolinkDb;

impl BiolinkDb {
    /// Bumps today's view counter. Days are bucketed in UTC.
    #[tracing::instrument(skip(self))]
    pub async fn record_profile_view(&self, profile_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
INSERT INTO profile_daily_stats (profile_id, day, views)
VALUES ($1, (NOW() AT TIME ZONE 'utc')::date, 1)
ON CONFLICT (profile_id, day)
DO UPDATE SET views = profile_daily_stats.views + 1
            "#,
        )
        .bind(profile_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn record_link_click(&self, link_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
INSERT INTO link_daily_stats (link_id, day, clicks)
VALUES ($1, (NOW() AT TIME ZONE 'utc')::date, 1)
ON CONFLICT (link_id, day)
DO UPDATE SET clicks = link_daily_stats.clicks + 1
            "#,
        )
        .bind(link_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn profile_views_range(
        &self,
        profile_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyViews>> {
        let views = sqlx::query_as::<_, DailyViews>(
            r#"
SELECT day, views
FROM profile_daily_stats
WHERE profile_id = $1 AND day BETWEEN $2 AND $3
ORDER BY day
            "#,
        )
        .bind(profile_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(views)
    }

    #[tracing::instrument(skip(self))]
    pub async fn link_clicks_range(
        &self,
        profile_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LinkClicks>> {
        let clicks = sqlx::query_as::<_, LinkClicks>(
            r#"
SELECT l.id AS link_id, l.title, COALESCE(SUM(s.clicks), 0)::bigint AS clicks
FROM links l
LEFT JOIN link_daily_stats s ON s.link_id = l.id AND s.day BETWEEN $2 AND $3
WHERE l.profile_id = $1
GROUP BY l.id, l.title
ORDER BY clicks DESC, l.title
            "#,
        )
        .bind(profile_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(clicks)
    }
}
