use axum::http::{StatusCode, header::AUTHORIZATION};
use axum_test::TestServer;
use model::{
    link::Link,
    paths,
    photo::{CreatePhotoResponse, Photo},
    profile::Profile,
};
use serde_json::json;
use sqlx::PgPool;

use crate::common::{bearer, create_app, owner_token, seed_plan, seed_profile, test_context};

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_link_crud_and_quota(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();

    let plan = seed_plan(&db, 2, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;
    let token = owner_token(&context, &profile);

    let server = TestServer::new(create_app(context)).unwrap();

    // Two links fit the plan
    for i in 0..2 {
        server
            .post(paths::ADMIN_LINKS)
            .add_header(AUTHORIZATION, bearer(&token))
            .json(&json!({ "title": format!("link {i}"), "url": "https://example.com" }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    // The third is over quota
    let over = server
        .post(paths::ADMIN_LINKS)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "title": "one too many", "url": "https://example.com" }))
        .await;
    over.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(over.text(), "QUOTA_EXCEEDED");

    let list_response = server
        .get(paths::ADMIN_LINKS)
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    list_response.assert_status_ok();
    let links: Vec<Link> = list_response.json();
    assert_eq!(links.len(), 2);

    // Update and delete free a slot again
    let updated_response = server
        .patch(&format!("/admin/links/{}", links[0].id))
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "title": "renamed" }))
        .await;
    updated_response.assert_status_ok();
    let updated: Link = updated_response.json();
    assert_eq!(updated.title, "renamed");

    server
        .delete(&format!("/admin/links/{}", links[1].id))
        .add_header(AUTHORIZATION, bearer(&token))
        .await
        .assert_status_ok();

    server
        .delete(&format!("/admin/links/{}", links[1].id))
        .add_header(AUTHORIZATION, bearer(&token))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .post(paths::ADMIN_LINKS)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "title": "fits again", "url": "https://example.com" }))
        .await
        .assert_status(StatusCode::CREATED);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_reorder_links(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();

    let plan = seed_plan(&db, 5, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;
    let token = owner_token(&context, &profile);

    let server = TestServer::new(create_app(context)).unwrap();

    let mut ids = Vec::new();
    for i in 0..3 {
        let response = server
            .post(paths::ADMIN_LINKS)
            .add_header(AUTHORIZATION, bearer(&token))
            .json(&json!({ "title": format!("link {i}"), "url": "https://example.com" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let link: Link = response.json();
        ids.push(link.id);
    }

    let reordered_response = server
        .put("/admin/links/reorder")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "link_ids": [ids[2], ids[0], ids[1]] }))
        .await;
    reordered_response.assert_status_ok();

    let reordered: Vec<Link> = reordered_response.json();
    assert_eq!(reordered[0].id, ids[2]);
    assert_eq!(reordered[1].id, ids[0]);
    assert_eq!(reordered[2].id, ids[1]);

    // The request must name every link exactly once
    server
        .put("/admin/links/reorder")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "link_ids": [ids[0], ids[1]] }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .put("/admin/links/reorder")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "link_ids": [ids[0], ids[1], uuid::Uuid::new_v4()] }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_faq_quota(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();

    let plan = seed_plan(&db, 3, 3, 1).await;
    let profile = seed_profile(&db, plan.id).await;
    let token = owner_token(&context, &profile);

    let server = TestServer::new(create_app(context)).unwrap();

    server
        .post(paths::ADMIN_FAQS)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "question": "Do you ship?", "answer": "Yes." }))
        .await
        .assert_status(StatusCode::CREATED);

    let over = server
        .post(paths::ADMIN_FAQS)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "question": "Another?", "answer": "No." }))
        .await;
    over.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(over.text(), "QUOTA_EXCEEDED");
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_entitlements_endpoint(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();

    let plan = seed_plan(&db, 5, 3, 2).await;
    let profile = seed_profile(&db, plan.id).await;
    let token = owner_token(&context, &profile);

    db.create_module(&model::module::CreateModuleRequest {
        code: "extra_faqs".to_string(),
        name: "Extra faqs".to_string(),
        description: None,
        effects: json!({ "extraFaqs": 4, "unlockVCard": true }),
    })
    .await
    .unwrap();
    db.upsert_grant(profile.id, "extra_faqs", None)
        .await
        .unwrap();

    let server = TestServer::new(create_app(context)).unwrap();

    let response = server
        .get(paths::ADMIN_ENTITLEMENTS)
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["maxLinks"], 5);
    assert_eq!(body["maxPhotos"], 3);
    assert_eq!(body["maxFaqs"], 6);
    assert_eq!(body["canUseVCard"], true);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_profile_update_normalizes_whatsapp(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;
    let token = owner_token(&context, &profile);

    let server = TestServer::new(create_app(context)).unwrap();

    let response = server
        .patch(paths::ADMIN_PROFILE)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "whatsapp_number": "+49 171 123 4567", "bio": "plants and pots" }))
        .await;
    response.assert_status_ok();

    let updated: Profile = response.json();
    assert_eq!(updated.whatsapp_number.as_deref(), Some("491711234567"));
    assert_eq!(updated.bio, "plants and pots");

    server
        .patch(paths::ADMIN_PROFILE)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "whatsapp_number": "not a number" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_photo_upload_flow(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();

    let plan = seed_plan(&db, 3, 1, 3).await;
    let profile = seed_profile(&db, plan.id).await;
    let token = owner_token(&context, &profile);

    let server = TestServer::new(create_app(context)).unwrap();

    server
        .post(paths::ADMIN_PHOTOS)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "file_name": "garden.svg" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let created_response = server
        .post(paths::ADMIN_PHOTOS)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "file_name": "garden.jpg", "caption": "the garden" }))
        .await;
    created_response.assert_status(StatusCode::CREATED);

    let created: CreatePhotoResponse = created_response.json();
    assert!(!created.upload_url.is_empty());
    assert!(!created.photo.uploaded);
    assert!(created.photo.object_key.ends_with(".jpg"));

    // A pending photo occupies the quota slot already
    let over = server
        .post(paths::ADMIN_PHOTOS)
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({ "file_name": "more.png" }))
        .await;
    over.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(over.text(), "QUOTA_EXCEEDED");

    let confirmed_response = server
        .post(&format!("/admin/photos/{}/confirm", created.photo.id))
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    confirmed_response.assert_status_ok();
    let confirmed: Photo = confirmed_response.json();
    assert!(confirmed.uploaded);

    server
        .post(&format!("/admin/photos/{}/confirm", uuid::Uuid::new_v4()))
        .add_header(AUTHORIZATION, bearer(&token))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_stats_endpoint(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;
    let token = owner_token(&context, &profile);

    let link = db
        .create_link(
            profile.id,
            &model::link::CreateLinkRequest {
                title: "shop".to_string(),
                url: "https://example.com/shop".to_string(),
            },
        )
        .await
        .unwrap();

    db.record_profile_view(profile.id).await.unwrap();
    db.record_profile_view(profile.id).await.unwrap();
    db.record_link_click(link.id).await.unwrap();

    let server = TestServer::new(create_app(context)).unwrap();

    let response = server
        .get(paths::ADMIN_STATS)
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    response.assert_status_ok();

    let body: model::stats::ProfileStats = response.json();
    assert_eq!(body.views.len(), 1);
    assert_eq!(body.views[0].views, 2);
    assert_eq!(body.clicks.len(), 1);
    assert_eq!(body.clicks[0].clicks, 1);
    assert_eq!(body.clicks[0].title, "shop");

    server
        .get(paths::ADMIN_STATS)
        .add_header(AUTHORIZATION, bearer(&token))
        .add_query_param("from", "2026-02-10")
        .add_query_param("to", "2026-02-01")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_owner_only_sees_their_own_rows(pool: PgPool) -> sqlx::Result<()> {
    let context = test_context(pool);
    let db = context.db.clone();

    let plan = seed_plan(&db, 3, 3, 3).await;
    let first = seed_profile(&db, plan.id).await;
    let second = seed_profile(&db, plan.id).await;

    let link = db
        .create_link(
            first.id,
            &model::link::CreateLinkRequest {
                title: "mine".to_string(),
                url: "https://example.com".to_string(),
            },
        )
        .await
        .unwrap();

    let second_token = owner_token(&context, &second);
    let server = TestServer::new(create_app(context)).unwrap();

    // Another owner's token cannot touch the row
    server
        .patch(&format!("/admin/links/{}", link.id))
        .add_header(AUTHORIZATION, bearer(&second_token))
        .json(&json!({ "title": "hijacked" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .delete(&format!("/admin/links/{}", link.id))
        .add_header(AUTHORIZATION, bearer(&second_token))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    Ok(())
}
