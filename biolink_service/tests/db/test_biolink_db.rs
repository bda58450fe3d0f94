use biolink_auth::login_code::hash_login_code;
use biolink_db_client::BiolinkDb;
use chrono::{Duration, Utc};
use model::{
    link::{CreateLinkRequest, UpdateLinkRequest},
    module::CreateModuleRequest,
    product::CreateProductRequestBuilder,
    profile::UpdateProfileRequest,
};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{seed_login_code, seed_plan, seed_profile, seed_super_admin};

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_profile_lookups(pool: PgPool) -> sqlx::Result<()> {
    let db = BiolinkDb::new(pool);

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;

    let by_handle = db.get_profile_by_handle(&profile.handle).await.unwrap();
    assert_eq!(by_handle.unwrap().id, profile.id);

    let by_email = db.get_profile_by_email(&profile.email).await.unwrap();
    assert_eq!(by_email.unwrap().id, profile.id);

    assert!(db.get_profile_by_handle("missing").await.unwrap().is_none());
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_update_profile_leaves_absent_fields_alone(pool: PgPool) -> sqlx::Result<()> {
    let db = BiolinkDb::new(pool);

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;

    let updated = db
        .update_profile(
            profile.id,
            &UpdateProfileRequest {
                bio: Some("plants".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.bio, "plants");
    assert_eq!(updated.display_name, profile.display_name);
    assert!(!updated.is_published);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_links_keep_their_positions(pool: PgPool) -> sqlx::Result<()> {
    let db = BiolinkDb::new(pool);

    let plan = seed_plan(&db, 5, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;

    let mut ids = Vec::new();
    for i in 0..3 {
        let link = db
            .create_link(
                profile.id,
                &CreateLinkRequest {
                    title: format!("link {i}"),
                    url: "https://example.com".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(link.position, i);
        ids.push(link.id);
    }

    let affected = db
        .reorder_links(profile.id, &[ids[1], ids[2], ids[0]])
        .await
        .unwrap();
    assert_eq!(affected, 3);

    let links = db.list_links(profile.id).await.unwrap();
    assert_eq!(links[0].id, ids[1]);
    assert_eq!(links[1].id, ids[2]);
    assert_eq!(links[2].id, ids[0]);

    let renamed = db
        .update_link(
            profile.id,
            ids[0],
            &UpdateLinkRequest {
                title: Some("renamed".to_string()),
                url: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.title, "renamed");
    assert_eq!(renamed.url, "https://example.com");

    assert!(db.delete_link(profile.id, ids[0]).await.unwrap());
    assert!(!db.delete_link(profile.id, ids[0]).await.unwrap());
    assert_eq!(db.count_links(profile.id).await.unwrap(), 2);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_login_codes_are_single_use_and_expire(pool: PgPool) -> sqlx::Result<()> {
    let db = BiolinkDb::new(pool);

    let code = seed_login_code(&db, "maria@example.com").await;
    let hash = hash_login_code(&code);

    assert!(db.consume_login_code("maria@example.com", &hash).await.unwrap());
    assert!(!db.consume_login_code("maria@example.com", &hash).await.unwrap());

    // An expired code is never consumable
    db.create_login_code(
        "late@example.com",
        &hash_login_code("123456"),
        Utc::now() - Duration::minutes(1),
    )
    .await
    .unwrap();
    assert!(
        !db.consume_login_code("late@example.com", &hash_login_code("123456"))
            .await
            .unwrap()
    );

    let count = db
        .count_recent_login_codes("late@example.com", Utc::now() - Duration::minutes(10))
        .await
        .unwrap();
    assert_eq!(count, 1);
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_super_admin_lookup(pool: PgPool) -> sqlx::Result<()> {
    let db = BiolinkDb::new(pool.clone());

    assert!(!db.is_super_admin("root@biolink.to").await.unwrap());
    seed_super_admin(&pool, "root@biolink.to").await;
    assert!(db.is_super_admin("root@biolink.to").await.unwrap());
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_upsert_grant_refreshes_the_expiry(pool: PgPool) -> sqlx::Result<()> {
    let db = BiolinkDb::new(pool);

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;
    db.create_module(&CreateModuleRequest {
        code: "boost".to_string(),
        name: "Boost".to_string(),
        description: None,
        effects: json!({ "extraLinks": 1 }),
    })
    .await
    .unwrap();

    let first_expiry = Utc::now() + Duration::days(1);
    db.upsert_grant(profile.id, "boost", Some(first_expiry))
        .await
        .unwrap();

    let refreshed = db
        .upsert_grant(profile.id, "boost", Some(Utc::now() + Duration::days(30)))
        .await
        .unwrap();
    let stored_expiry = refreshed.expires_at.unwrap();
    assert!(stored_expiry > first_expiry);

    // Still a single grant row
    let grants = db.list_grants(profile.id).await.unwrap();
    assert_eq!(grants.len(), 1);
    assert_eq!(grants[0].expires_at, Some(stored_expiry));

    assert!(db.revoke_grant(profile.id, "boost").await.unwrap());
    assert!(!db.revoke_grant(profile.id, "boost").await.unwrap());
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_deleting_a_photo_clears_references(pool: PgPool) -> sqlx::Result<()> {
    let db = BiolinkDb::new(pool);

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;

    let photo_id = Uuid::new_v4();
    let photo = db
        .create_photo(profile.id, photo_id, "profiles/p/photos/a.jpg", "")
        .await
        .unwrap();
    db.mark_photo_uploaded(profile.id, photo_id)
        .await
        .unwrap()
        .unwrap();

    let with_avatar = db
        .set_profile_avatar(profile.id, &photo.object_key)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(with_avatar.avatar_key.as_deref(), Some("profiles/p/photos/a.jpg"));

    let product = db
        .create_product(
            profile.id,
            &CreateProductRequestBuilder::default()
                .title("Terracotta pot".to_string())
                .price_cents(1500)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    db.set_product_image(profile.id, product.id, &photo.object_key)
        .await
        .unwrap()
        .unwrap();

    let deleted_key = db.delete_photo(profile.id, photo_id).await.unwrap();
    assert_eq!(deleted_key.as_deref(), Some("profiles/p/photos/a.jpg"));

    let profile_after = db.get_profile(profile.id).await.unwrap().unwrap();
    assert!(profile_after.avatar_key.is_none());

    let products = db.list_products(profile.id).await.unwrap();
    assert!(products[0].image_key.is_none());

    assert!(db.delete_photo(profile.id, photo_id).await.unwrap().is_none());
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_daily_stats_accumulate(pool: PgPool) -> sqlx::Result<()> {
    let db = BiolinkDb::new(pool);

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;
    let link = db
        .create_link(
            profile.id,
            &CreateLinkRequest {
                title: "shop".to_string(),
                url: "https://example.com".to_string(),
            },
        )
        .await
        .unwrap();

    for _ in 0..3 {
        db.record_profile_view(profile.id).await.unwrap();
    }
    db.record_link_click(link.id).await.unwrap();
    db.record_link_click(link.id).await.unwrap();

    let today = Utc::now().date_naive();
    let views = db
        .profile_views_range(profile.id, today - Duration::days(7), today)
        .await
        .unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].day, today);
    assert_eq!(views[0].views, 3);

    let clicks = db
        .link_clicks_range(profile.id, today - Duration::days(7), today)
        .await
        .unwrap();
    assert_eq!(clicks.len(), 1);
    assert_eq!(clicks[0].link_id, link.id);
    assert_eq!(clicks[0].clicks, 2);

    // A range before any activity is empty
    let quiet = db
        .profile_views_range(
            profile.id,
            today - Duration::days(30),
            today - Duration::days(8),
        )
        .await
        .unwrap();
    assert!(quiet.is_empty());
    Ok(())
}

#[sqlx::test(migrations = "../biolink_db_client/migrations")]
async fn test_plan_deactivation_keeps_assignments(pool: PgPool) -> sqlx::Result<()> {
    let db = BiolinkDb::new(pool);

    let plan = seed_plan(&db, 3, 3, 3).await;
    let profile = seed_profile(&db, plan.id).await;

    assert!(db.deactivate_plan(plan.id).await.unwrap());

    // The profile keeps its plan and the limits still resolve
    let kept = db.get_profile(profile.id).await.unwrap().unwrap();
    assert_eq!(kept.plan_id, Some(plan.id));

    let stored = db.get_plan(plan.id).await.unwrap().unwrap();
    assert!(!stored.is_active);
    Ok(())
}
