use axum::http::HeaderValue;

pub const ORIGINS: [HeaderValue; 5] = [
    HeaderValue::from_static("http://localhost:3000"),
    HeaderValue::from_static("http://localhost:5173"),
    HeaderValue::from_static("https://biolink.to"),
    HeaderValue::from_static("https://app.biolink.to"),
    HeaderValue::from_static("https://www.biolink.to"),
];

/// The base URL public profile pages are served under, used for the vCard
pub const PUBLIC_PAGE_BASE_URL: &str = "https://biolink.to";

/// How many login codes one email may request inside the window
pub const LOGIN_CODE_RATE_LIMIT: i64 = 3;

/// The sliding window the login code rate limit is counted over
pub const LOGIN_CODE_RATE_WINDOW_MINUTES: i64 = 10;
