use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{Router, http::HeaderValue};
use biolink_auth::{
    login_code::{LOGIN_CODE_TTL_MINUTES, generate_login_code, hash_login_code},
    token::{AuthKeys, issue_access_token},
};
use biolink_db_client::BiolinkDb;
use biolink_service::{
    api::{self, context::ApiContext, health},
    config::{Config, Environment},
};
use chrono::{Duration, Utc};
use entitlements::{
    domain::{port::SystemClock, service::EntitlementsServiceImpl},
    outbound::pgpool::EntitlementsDb,
};
use mailer::Mailer;
use media_store::MediaStore;
use model::{
    auth::Role,
    plan::{CreatePlanRequestBuilder, Plan},
    profile::{CreateProfileRequestBuilder, Profile, UpdateProfileRequest},
};
use sqlx::PgPool;
use uuid::Uuid;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

// The AWS clients are wired with static credentials; nothing in the tests
// opens a connection, only presigning runs and that is local.
fn test_s3_client() -> aws_sdk_s3::Client {
    let credentials = aws_sdk_s3::config::Credentials::new("test", "test", None, None, "test");
    let conf = aws_sdk_s3::config::Builder::new()
        .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
        .credentials_provider(credentials)
        .region(aws_sdk_s3::config::Region::new("us-east-1"))
        .build();
    aws_sdk_s3::Client::from_conf(conf)
}

fn test_ses_client() -> aws_sdk_sesv2::Client {
    let credentials = aws_sdk_sesv2::config::Credentials::new("test", "test", None, None, "test");
    let conf = aws_sdk_sesv2::config::Builder::new()
        .behavior_version(aws_sdk_sesv2::config::BehaviorVersion::latest())
        .credentials_provider(credentials)
        .region(aws_sdk_sesv2::config::Region::new("us-east-1"))
        .build();
    aws_sdk_sesv2::Client::from_conf(conf)
}

pub fn test_context(pool: PgPool) -> ApiContext {
    ApiContext {
        db: BiolinkDb::new(pool.clone()),
        entitlements: Arc::new(EntitlementsServiceImpl::new(
            EntitlementsDb::new(pool.clone()),
            EntitlementsDb::new(pool),
            SystemClock,
        )),
        media: MediaStore::new(test_s3_client(), "biolink-media-test".to_string()),
        mailer: Arc::new(Mailer::new(test_ses_client(), "login@biolink.to")),
        auth_keys: AuthKeys::new("test_secret"),
        config: Arc::new(Config {
            database_url: String::new(),
            port: 0,
            environment: Environment::Local,
            media_bucket: "biolink-media-test".to_string(),
            from_email: "login@biolink.to".to_string(),
            token_secret: "test_secret".to_string(),
        }),
    }
}

pub fn create_app(context: ApiContext) -> Router {
    api::api_router(context).merge(health::router())
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

pub fn owner_token(context: &ApiContext, profile: &Profile) -> String {
    issue_access_token(
        &context.auth_keys,
        profile.id,
        &profile.email,
        &Role::Owner.to_string(),
    )
    .unwrap()
}

pub fn super_admin_token(context: &ApiContext) -> String {
    issue_access_token(
        &context.auth_keys,
        Uuid::nil(),
        "admin@biolink.to",
        &Role::SuperAdmin.to_string(),
    )
    .unwrap()
}

pub async fn seed_plan(db: &BiolinkDb, max_links: i32, max_photos: i32, max_faqs: i32) -> Plan {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    db.create_plan(
        &CreatePlanRequestBuilder::default()
            .name(format!("plan_{n}"))
            .max_links(max_links)
            .max_photos(max_photos)
            .max_faqs(max_faqs)
            .build()
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn seed_profile(db: &BiolinkDb, plan_id: i64) -> Profile {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    db.create_profile(
        &CreateProfileRequestBuilder::default()
            .handle(format!("handle{n}"))
            .email(format!("owner{n}@example.com"))
            .plan_id(plan_id)
            .build()
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn publish_profile(db: &BiolinkDb, profile_id: Uuid) {
    db.update_profile(
        profile_id,
        &UpdateProfileRequest {
            is_published: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
}

pub async fn seed_super_admin(pool: &PgPool, email: &str) {
    sqlx::query("INSERT INTO super_admins (email) VALUES ($1)")
        .bind(email)
        .execute(pool)
        .await
        .unwrap();
}

/// Stores a hashed login code for the email and returns the raw code.
pub async fn seed_login_code(db: &BiolinkDb, email: &str) -> String {
    let code = generate_login_code();
    db.create_login_code(
        email,
        &hash_login_code(&code),
        Utc::now() + Duration::minutes(LOGIN_CODE_TTL_MINUTES),
    )
    .await
    .unwrap();
    code
}
