use anyhow::Context;
use biolink_auth::token::AuthKeys;
use biolink_db_client::BiolinkDb;
use biolink_entrypoint::BiolinkEntrypoint;
use biolink_service::{
    api::{self, context::ApiContext},
    config::{Config, Environment},
};
use entitlements::{
    domain::{port::SystemClock, service::EntitlementsServiceImpl},
    outbound::pgpool::EntitlementsDb,
};
use mailer::Mailer;
use media_store::MediaStore;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    BiolinkEntrypoint::default().init();

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    tracing::info!("initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 30),
        Environment::Develop => (3, 20),
        Environment::Local => (3, 10),
    };

    let pool = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to biolinkdb")?;

    tracing::info!(
        min_connections,
        max_connections,
        "initialized biolinkdb connection"
    );

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region("us-east-1")
        .load()
        .await;

    let media = MediaStore::new(
        aws_sdk_s3::Client::new(&aws_config),
        config.media_bucket.clone(),
    );
    tracing::info!(bucket = %config.media_bucket, "initialized media store");

    let mailer = Mailer::new(aws_sdk_sesv2::Client::new(&aws_config), &config.from_email);
    tracing::info!("initialized mailer");

    let entitlements = EntitlementsServiceImpl::new(
        EntitlementsDb::new(pool.clone()),
        EntitlementsDb::new(pool.clone()),
        SystemClock,
    );

    let auth_keys = AuthKeys::new(&config.token_secret);

    api::setup_and_serve(ApiContext {
        db: BiolinkDb::new(pool),
        entitlements: Arc::new(entitlements),
        media,
        mailer: Arc::new(mailer),
        auth_keys,
        config: Arc::new(config),
    })
    .await?;
    Ok(())
}
