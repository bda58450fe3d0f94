use anyhow::Result;
use model::profile::{CreateProfileRequest, Profile, UpdateProfileRequest};
use models_pagination::PageParams;
use uuid::Uuid;

use crate::db::BiolinkDb;

impl BiolinkDb {
    #[tracing::instrument(skip(self))]
    pub async fn get_profile(&self, profile_id: Uuid) -> Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
SELECT id, handle, email, display_name, bio, whatsapp_number, avatar_key, plan_id, is_published, created_at, updated_at
FROM profiles
WHERE id = $1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_profile_by_handle(&self, handle: &str) -> Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
SELECT id, handle, email, display_name, bio, whatsapp_number, avatar_key, plan_id, is_published, created_at, updated_at
FROM profiles
WHERE handle = $1
            "#,
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_profile_by_email(&self, email: &str) -> Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
SELECT id, handle, email, display_name, bio, whatsapp_number, avatar_key, plan_id, is_published, created_at, updated_at
FROM profiles
WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    #[tracing::instrument(skip(self, request), fields(handle = %request.handle))]
    pub async fn create_profile(&self, request: &CreateProfileRequest) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
INSERT INTO profiles (id, handle, email, display_name, plan_id)
VALUES ($1, $2, $3, $4, $5)
RETURNING id, handle, email, display_name, bio, whatsapp_number, avatar_key, plan_id, is_published, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.handle)
        .bind(&request.email)
        .bind(request.display_name.as_deref().unwrap_or(""))
        .bind(request.plan_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Applies the non-media fields of an update request. The avatar is set
    /// separately once the photo id has been resolved to an object key.
    #[tracing::instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        profile_id: Uuid,
        request: &UpdateProfileRequest,
    ) -> Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
UPDATE profiles
SET display_name = COALESCE($2, display_name),
    bio = COALESCE($3, bio),
    whatsapp_number = COALESCE($4, whatsapp_number),
    is_published = COALESCE($5, is_published),
    updated_at = NOW()
WHERE id = $1
RETURNING id, handle, email, display_name, bio, whatsapp_number, avatar_key, plan_id, is_published, created_at, updated_at
            "#,
        )
        .bind(profile_id)
        .bind(&request.display_name)
        .bind(&request.bio)
        .bind(&request.whatsapp_number)
        .bind(request.is_published)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_profile_avatar(
        &self,
        profile_id: Uuid,
        avatar_key: &str,
    ) -> Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
UPDATE profiles
SET avatar_key = $2, updated_at = NOW()
WHERE id = $1
RETURNING id, handle, email, display_name, bio, whatsapp_number, avatar_key, plan_id, is_published, created_at, updated_at
            "#,
        )
        .bind(profile_id)
        .bind(avatar_key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_profile_plan(
        &self,
        profile_id: Uuid,
        plan_id: i64,
    ) -> Result<Option<Profile>> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
UPDATE profiles
SET plan_id = $2, updated_at = NOW()
WHERE id = $1
RETURNING id, handle, email, display_name, bio, whatsapp_number, avatar_key, plan_id, is_published, created_at, updated_at
            "#,
        )
        .bind(profile_id)
        .bind(plan_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_profiles(&self, params: &PageParams) -> Result<(Vec<Profile>, i64)> {
        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
            .fetch_one(&self.pool)
            .await?;

        let profiles = sqlx::query_as::<_, Profile>(
            r#"
SELECT id, handle, email, display_name, bio, whatsapp_number, avatar_key, plan_id, is_published, created_at, updated_at
FROM profiles
ORDER BY created_at DESC
LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((profiles, total_count))
    }
}
