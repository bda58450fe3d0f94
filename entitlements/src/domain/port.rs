//! Contains the port logic for resolving entitlements

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::model::{Entitlements, EntitlementsError, GrantedModule, PlanLimitsLookup};

/// A source of the current time, injected so expiry checks are deterministic
/// under test
pub trait Clock: Clone + Send + Sync + 'static {
    /// The moment the evaluation runs at
    fn now(&self) -> DateTime<Utc>;
}

/// A [Clock] backed by the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// The PlanLimitsRepository resolves the base limits a profile's plan provides
pub trait PlanLimitsRepository: Clone + Send + Sync + 'static {
    /// Looks up the plan limits reachable from the profile's plan assignment
    fn plan_limits_for_profile(
        &self,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<PlanLimitsLookup, EntitlementsError>> + Send;
}

/// The ModuleGrantRepository resolves the module grants active for a profile
pub trait ModuleGrantRepository: Clone + Send + Sync + 'static {
    /// Fetches the grants for the profile whose expiry is null or strictly
    /// after `now`, together with their raw effects payloads
    fn active_grants_for_profile(
        &self,
        profile_id: Uuid,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<GrantedModule>, EntitlementsError>> + Send;
}

/// The EntitlementsService merges a profile's plan limits with its active
/// module grants into the effective capability set
pub trait EntitlementsService: Clone + Send + Sync + 'static {
    /// Resolves the effective entitlements for the profile at the current time
    fn resolve_entitlements(
        &self,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<Entitlements, EntitlementsError>> + Send;
}
