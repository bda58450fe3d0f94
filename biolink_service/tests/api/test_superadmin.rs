use axum::http::{StatusCode, header::AUTHORIZATION};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use model::{
    module::{Module, ModuleGrant},
    paths,
    plan::Plan,
    profile::Profile,
};
use serde_json::json;
use sqlx::PgPool;

use crate::common::{
    bearer, create_app, owner_token, seed_plan, seed_profile, super_admin_token, test_context,
};

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_plan_management(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let token = super_admin_token(&context);
    let server = TestServer::new(create_app(context)).unwrap();

    let created_response = server
        .post(paths::SUPERADMIN_PLANS)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({
            "name": "starter",
            "price_cents": 0,
            "max_links": 3,
            "max_photos": 1,
            "max_faqs": 1
        }))
        .await;
    created_response.assert_status(StatusCode::CREATED);
    let plan: Plan = created_response.json();
    assert_eq!(plan.name, "starter");
    assert!(plan.is_active);

    // Negative limits are rejected
    server
        .post(paths::SUPERADMIN_PLANS)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({
            "name": "broken",
            "max_links": -1,
            "max_photos": 0,
            "max_faqs": 0
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let updated_response = server
        .patch(&format!("/superadmin/plans/{}", plan.id))
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "max_links": 5, "can_use_vcard": true }))
        .await;
    updated_response.assert_status_ok();
    let updated: Plan = updated_response.json();
    assert_eq!(updated.max_links, 5);
    assert!(updated.can_use_vcard);

    server
        .delete(&format!("/superadmin/plans/{}", plan.id))
        .add_header(AUTHORIZATION, bearer(&token))
        .await
        .assert_status_ok();

    let plans_response = server
        .get(paths::SUPERADMIN_PLANS)
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    plans_response.assert_status_ok();
    let plans: Vec<Plan> = plans_response.json();
    assert!(plans.iter().any(|p| p.id == plan.id && !p.is_active));

    server
        .delete("/superadmin/plans/424242")
        .add_header(AUTHORIZATION, bearer(&token))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_module_management(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let token = super_admin_token(&context);
    let server = TestServer::new(create_app(context)).unwrap();

    let created_response = server
        .post(paths::SUPERADMIN_MODULES)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({
            "code": "extra_links",
            "name": "Extra links",
            "effects": { "extraLinks": 10 }
        }))
        .await;
    created_response.assert_status(StatusCode::CREATED);
    let module: Module = created_response.json();
    assert_eq!(module.code, "extra_links");
    assert_eq!(module.effects["extraLinks"], 10);

    // The effects payload must be an object
    server
        .post(paths::SUPERADMIN_MODULES)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({
            "code": "broken",
            "name": "Broken",
            "effects": "extraLinks=10"
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let updated_response = server
        .patch("/superadmin/modules/extra_links")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "effects": { "extraLinks": 20 } }))
        .await;
    updated_response.assert_status_ok();
    let updated: Module = updated_response.json();
    assert_eq!(updated.effects["extraLinks"], 20);

    server
        .delete("/superadmin/modules/extra_links")
        .add_header(AUTHORIZATION, bearer(&token))
        .await
        .assert_status_ok();

    let modules_response = server
        .get(paths::SUPERADMIN_MODULES)
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    let modules: Vec<Module> = modules_response.json();
    assert!(modules.iter().any(|m| m.code == "extra_links" && !m.is_active));
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_profile_creation(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();
    let token = super_admin_token(&context);

    let plan = seed_plan(&db, 3, 3, 3).await;
    let server = TestServer::new(create_app(context)).unwrap();

    let created_response = server
        .post(paths::SUPERADMIN_PROFILES)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({
            "handle": "Maria-Studio",
            "email": "Maria@Example.com",
            "plan_id": plan.id
        }))
        .await;
    created_response.assert_status(StatusCode::CREATED);

    // Handle and email are stored normalized
    let profile: Profile = created_response.json();
    assert_eq!(profile.handle, "maria-studio");
    assert_eq!(profile.email, "maria@example.com");

    // The handle is taken now, case insensitively
    server
        .post(paths::SUPERADMIN_PROFILES)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({
            "handle": "maria-studio",
            "email": "other@example.com",
            "plan_id": plan.id
        }))
        .await
        .assert_status(StatusCode::CONFLICT);

    server
        .post(paths::SUPERADMIN_PROFILES)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({
            "handle": "x",
            "email": "short@example.com",
            "plan_id": plan.id
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post(paths::SUPERADMIN_PROFILES)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({
            "handle": "someone-else",
            "email": "someone@example.com",
            "plan_id": 424242
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_profile_listing_is_paginated(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();
    let token = super_admin_token(&context);

    let plan = seed_plan(&db, 3, 3, 3).await;
    for _ in 0..3 {
        seed_profile(&db, plan.id).await;
    }

    let server = TestServer::new(create_app(context)).unwrap();

    let response = server
        .get(paths::SUPERADMIN_PROFILES)
        .add_header(AUTHORIZATION, bearer(&token))
        .add_query_param("limit", "2")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["total_count"], 3);
    assert_eq!(body["limit"], 2);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_assigning_a_plan_changes_entitlements(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();
    let admin = super_admin_token(&context);

    let small = seed_plan(&db, 1, 1, 1).await;
    let big = seed_plan(&db, 10, 10, 10).await;
    let profile = seed_profile(&db, small.id).await;
    let owner = owner_token(&context, &profile);

    let server = TestServer::new(create_app(context)).unwrap();

    let response = server
        .put(&format!("/superadmin/profiles/{}/plan", profile.id))
        .add_header(AUTHORIZATION, bearer(&admin))
        .json(&json!({ "plan_id": big.id }))
        .await;
    response.assert_status_ok();

    let entitlements_response = server
        .get(paths::ADMIN_ENTITLEMENTS)
        .add_header(AUTHORIZATION, bearer(&owner))
        .await;
    let body: serde_json::Value = entitlements_response.json();
    assert_eq!(body["maxLinks"], 10);

    // A deactivated plan cannot be assigned
    db.deactivate_plan(small.id).await.unwrap();
    server
        .put(&format!("/superadmin/profiles/{}/plan", profile.id))
        .add_header(AUTHORIZATION, bearer(&admin))
        .json(&json!({ "plan_id": small.id }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_grant_and_revoke_modules(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();
    let admin = super_admin_token(&context);

    let plan = seed_plan(&db, 1, 1, 1).await;
    let profile = seed_profile(&db, plan.id).await;
    let owner = owner_token(&context, &profile);

    db.create_module(&model::module::CreateModuleRequest {
        code: "boost".to_string(),
        name: "Boost".to_string(),
        description: None,
        effects: json!({ "extraLinks": 4 }),
    })
    .await
    .unwrap();

    let server = TestServer::new(create_app(context)).unwrap();

    let granted_response = server
        .put(&format!("/superadmin/profiles/{}/modules/boost", profile.id))
        .add_header(AUTHORIZATION, bearer(&admin))
        .json(&json!({}))
        .await;
    granted_response.assert_status_ok();
    let grant: ModuleGrant = granted_response.json();
    assert_eq!(grant.module_code, "boost");
    assert!(grant.expires_at.is_none());

    let body: serde_json::Value = server
        .get(paths::ADMIN_ENTITLEMENTS)
        .add_header(AUTHORIZATION, bearer(&owner))
        .await
        .json();
    assert_eq!(body["maxLinks"], 5);

    server
        .delete(&format!("/superadmin/profiles/{}/modules/boost", profile.id))
        .add_header(AUTHORIZATION, bearer(&admin))
        .await
        .assert_status_ok();

    let body: serde_json::Value = server
        .get(paths::ADMIN_ENTITLEMENTS)
        .add_header(AUTHORIZATION, bearer(&owner))
        .await
        .json();
    assert_eq!(body["maxLinks"], 1);

    server
        .delete(&format!("/superadmin/profiles/{}/modules/boost", profile.id))
        .add_header(AUTHORIZATION, bearer(&admin))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_expired_grants_do_not_contribute(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();
    let admin = super_admin_token(&context);

    let plan = seed_plan(&db, 1, 1, 1).await;
    let profile = seed_profile(&db, plan.id).await;
    let owner = owner_token(&context, &profile);

    db.create_module(&model::module::CreateModuleRequest {
        code: "boost".to_string(),
        name: "Boost".to_string(),
        description: None,
        effects: json!({ "extraLinks": 4 }),
    })
    .await
    .unwrap();

    let server = TestServer::new(create_app(context)).unwrap();

    server
        .put(&format!("/superadmin/profiles/{}/modules/boost", profile.id))
        .add_header(AUTHORIZATION, bearer(&admin))
        .json(&json!({ "expires_at": Utc::now() - Duration::hours(1) }))
        .await
        .assert_status_ok();

    let body: serde_json::Value = server
        .get(paths::ADMIN_ENTITLEMENTS)
        .add_header(AUTHORIZATION, bearer(&owner))
        .await
        .json();
    assert_eq!(body["maxLinks"], 1);

    // The grant still shows up in the grant listing
    let grants_response = server
        .get(&format!("/superadmin/profiles/{}/modules", profile.id))
        .add_header(AUTHORIZATION, bearer(&admin))
        .await;
    grants_response.assert_status_ok();
    let grants: Vec<ModuleGrant> = grants_response.json();
    assert_eq!(grants.len(), 1);

    // Granting again with a future expiry refreshes the grant
    server
        .put(&format!("/superadmin/profiles/{}/modules/boost", profile.id))
        .add_header(AUTHORIZATION, bearer(&admin))
        .json(&json!({ "expires_at": Utc::now() + Duration::hours(1) }))
        .await
        .assert_status_ok();

    let body: serde_json::Value = server
        .get(paths::ADMIN_ENTITLEMENTS)
        .add_header(AUTHORIZATION, bearer(&owner))
        .await
        .json();
    assert_eq!(body["maxLinks"], 5);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_granting_an_inactive_module_is_rejected(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();
    let admin = super_admin_token(&context);

    let plan = seed_plan(&db, 1, 1, 1).await;
    let profile = seed_profile(&db, plan.id).await;

    db.create_module(&model::module::CreateModuleRequest {
        code: "legacy".to_string(),
        name: "Legacy".to_string(),
        description: None,
        effects: json!({}),
    })
    .await
    .unwrap();
    db.deactivate_module("legacy").await.unwrap();

    let server = TestServer::new(create_app(context)).unwrap();

    server
        .put(&format!("/superadmin/profiles/{}/modules/legacy", profile.id))
        .add_header(AUTHORIZATION, bearer(&admin))
        .json(&json!({}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .put(&format!(
            "/superadmin/profiles/{}/modules/no-such-module",
            profile.id
        ))
        .add_header(AUTHORIZATION, bearer(&admin))
        .json(&json!({}))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}
