use axum::extract::FromRef;
use biolink_auth::token::AuthKeys;
use biolink_db_client::BiolinkDb;
use entitlements::{
    domain::{port::SystemClock, service::EntitlementsServiceImpl},
    outbound::pgpool::EntitlementsDb,
};
use mailer::Mailer;
use media_store::MediaStore;
use std::sync::Arc;

use crate::config::Config;

/// The entitlements resolver wired to the live database and the system clock
pub type LiveEntitlements = EntitlementsServiceImpl<EntitlementsDb, EntitlementsDb, SystemClock>;

#[derive(Clone, FromRef)]
pub struct ApiContext {
    /// Biolink database connection
    pub db: BiolinkDb,
    /// Resolves the effective entitlements behind the quota gates and the
    /// public page
    pub entitlements: Arc<LiveEntitlements>,
    pub media: MediaStore,
    pub mailer: Arc<Mailer>,
    pub auth_keys: AuthKeys,
    pub config: Arc<Config>,
}
