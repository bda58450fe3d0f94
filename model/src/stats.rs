//! Models for the daily view and click counters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Date range filter for the stats endpoint
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct StatsParams {
    /// First day to include, defaults to 30 days before `to`
    pub from: Option<NaiveDate>,
    /// Last day to include, defaults to today
    pub to: Option<NaiveDate>,
}

/// Profile views recorded on one day
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct DailyViews {
    pub day: NaiveDate,
    pub views: i64,
}

/// Click total for one link over the requested range
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct LinkClicks {
    pub link_id: Uuid,
    pub title: String,
    pub clicks: i64,
}

/// Stats payload returned to the profile owner
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileStats {
    pub views: Vec<DailyViews>,
    pub clicks: Vec<LinkClicks>,
}
