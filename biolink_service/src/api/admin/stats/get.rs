use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use model::{
    auth::OwnerContext,
    paths,
    stats::{ProfileStats, StatsParams},
};

use crate::api::context::ApiContext;

#[utoipa::path(
    get,
    path = paths::ADMIN_STATS,
    params(StatsParams),
    responses(
        (status = 200, description = "Daily profile views and per link clicks over the range", body = ProfileStats),
        (status = 400, description = "The date range is invalid", body = String),
        (status = 401, description = "Unauthorized", body = String)
    ),
    tag = "stats"
)]
#[tracing::instrument(skip(context, owner), fields(profile_id = %owner.profile_id))]
pub async fn get_stats(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Query(params): Query<StatsParams>,
) -> Result<Json<ProfileStats>, Response> {
    // The range defaults to the last thirty days ending today.
    let to = params.to.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let from = params.from.unwrap_or_else(|| to - chrono::Duration::days(30));

    if from > to {
        return Err((StatusCode::BAD_REQUEST, "invalid date range").into_response());
    }

    let views = context
        .db
        .profile_views_range(owner.profile_id, from, to)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to fetch profile views");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    let clicks = context
        .db
        .link_clicks_range(owner.profile_id, from, to)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to fetch link clicks");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    Ok(Json(ProfileStats { views, clicks }))
}
