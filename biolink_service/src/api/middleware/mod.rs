pub(in crate::api) mod auth;
pub(in crate::api) mod rate_limit;
