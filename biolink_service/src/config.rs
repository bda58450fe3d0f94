use anyhow::Context;

pub use biolink_entrypoint::Environment;

/// Configuration parameters for the application.
#[derive(Debug)]
pub struct Config {
    /// The connection URL for the biolink Postgres database
    pub database_url: String,
    /// The port to listen for HTTP requests on.
    pub port: usize,
    /// The environment we are in
    pub environment: Environment,
    /// The S3 bucket holding avatars, gallery photos and product images
    pub media_bucket: String,
    /// The address login code emails are sent from
    pub from_email: String,
    /// The symmetric secret access tokens are signed with
    pub token_secret: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .unwrap();
        let environment = Environment::new_or_prod();
        let media_bucket =
            std::env::var("MEDIA_BUCKET").context("MEDIA_BUCKET must be provided")?;
        let from_email = std::env::var("FROM_EMAIL").context("FROM_EMAIL must be provided")?;
        let token_secret =
            std::env::var("TOKEN_SECRET").context("TOKEN_SECRET must be provided")?;

        Ok(Config {
            database_url,
            port,
            environment,
            media_bucket,
            from_email,
            token_secret,
        })
    }
}
