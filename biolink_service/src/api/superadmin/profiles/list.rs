use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{paths, profile::Profile};
use models_pagination::{PageParams, Paginated};

use crate::api::context::ApiContext;

#[utoipa::path(
    get,
    path = paths::SUPERADMIN_PROFILES,
    params(PageParams),
    responses(
        (status = 200, description = "A page of profiles ordered by creation time", body = Paginated<Profile>),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The caller is not a super admin", body = String)
    ),
    tag = "profiles"
)]
#[tracing::instrument(skip(context))]
pub async fn list_profiles(
    State(context): State<ApiContext>,
    Query(params): Query<PageParams>,
) -> Result<Json<Paginated<Profile>>, Response> {
    let (profiles, total_count) = context.db.list_profiles(&params).await.map_err(|err| {
        tracing::error!(error=?err, "failed to list profiles");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;

    Ok(Json(Paginated::new(profiles, total_count, &params)))
}
