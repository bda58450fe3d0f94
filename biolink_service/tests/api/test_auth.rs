use axum::http::{StatusCode, header::AUTHORIZATION};
use axum_test::TestServer;
use model::{auth::AccessTokenResponse, paths};
use serde_json::json;
use sqlx::PgPool;

use crate::common::{
    bearer, create_app, owner_token, seed_login_code, seed_plan, seed_profile, seed_super_admin,
    test_context,
};

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_login_with_emailed_code(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();
    let server = TestServer::new(create_app(context)).unwrap();

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;
    let code = seed_login_code(&db, &profile.email).await;

    let response = server
        .post(paths::AUTH_LOGIN)
        .json(&json!({ "email": profile.email, "code": code }))
        .await;
    response.assert_status_ok();

    let body: AccessTokenResponse = response.json();
    assert!(!body.access_token.is_empty());

    // The token opens the admin endpoints
    let profile_response = server
        .get("/admin/profile")
        .add_header(AUTHORIZATION, bearer(&body.access_token))
        .await;
    profile_response.assert_status_ok();
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_login_with_wrong_code(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();
    let server = TestServer::new(create_app(context)).unwrap();

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;
    let _code = seed_login_code(&db, &profile.email).await;

    let response = server
        .post(paths::AUTH_LOGIN)
        .json(&json!({ "email": profile.email, "code": "000000" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_login_code_is_single_use(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();
    let server = TestServer::new(create_app(context)).unwrap();

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;
    let code = seed_login_code(&db, &profile.email).await;

    server
        .post(paths::AUTH_LOGIN)
        .json(&json!({ "email": profile.email, "code": code }))
        .await
        .assert_status_ok();

    // The same code cannot be exchanged twice
    server
        .post(paths::AUTH_LOGIN)
        .json(&json!({ "email": profile.email, "code": code }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_login_as_super_admin_without_profile(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool.clone());
    let db = context.db.clone();
    let server = TestServer::new(create_app(context)).unwrap();

    seed_super_admin(&pool, "root@biolink.to").await;
    let code = seed_login_code(&db, "root@biolink.to").await;

    let response = server
        .post(paths::AUTH_LOGIN)
        .json(&json!({ "email": "root@biolink.to", "code": code }))
        .await;
    response.assert_status_ok();

    let body: AccessTokenResponse = response.json();
    let plans_response = server
        .get(paths::SUPERADMIN_PLANS)
        .add_header(AUTHORIZATION, bearer(&body.access_token))
        .await;
    plans_response.assert_status_ok();
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_request_code_does_not_reveal_accounts(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();
    let server = TestServer::new(create_app(context)).unwrap();

    // An email without an account gets the same answer as one with, and no
    // code row is written for it.
    let response = server
        .post(paths::AUTH_CODE)
        .json(&json!({ "email": "nobody@example.com" }))
        .await;
    response.assert_status_ok();

    let count = db
        .count_recent_login_codes(
            "nobody@example.com",
            chrono::Utc::now() - chrono::Duration::hours(1),
        )
        .await
        .unwrap();
    assert_eq!(count, 0);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_request_code_rejects_invalid_email(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let server = TestServer::new(create_app(context)).unwrap();

    let response = server
        .post(paths::AUTH_CODE)
        .json(&json!({ "email": "not-an-email" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_request_code_rate_limit(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();
    let server = TestServer::new(create_app(context)).unwrap();

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;
    for _ in 0..3 {
        seed_login_code(&db, &profile.email).await;
    }

    let response = server
        .post(paths::AUTH_CODE)
        .json(&json!({ "email": profile.email }))
        .await;
    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_admin_requires_token(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let server = TestServer::new(create_app(context)).unwrap();

    server
        .get("/admin/profile")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .get("/admin/profile")
        .add_header(AUTHORIZATION, bearer("garbage"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_superadmin_rejects_owner_tokens(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;
    let token = owner_token(&context, &profile);

    let server = TestServer::new(create_app(context)).unwrap();

    server
        .get(paths::SUPERADMIN_PLANS)
        .add_header(AUTHORIZATION, bearer(&token))
        .await
        .assert_status(StatusCode::FORBIDDEN);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_login_without_account_or_admin_entry(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();
    let server = TestServer::new(create_app(context)).unwrap();

    // A code exists but neither a profile nor a super admin entry does
    let code = seed_login_code(&db, "stray@example.com").await;

    let response = server
        .post(paths::AUTH_LOGIN)
        .json(&json!({ "email": "stray@example.com", "code": code }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    Ok(())
}
