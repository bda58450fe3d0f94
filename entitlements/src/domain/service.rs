//! Contains the service logic for resolving entitlements

use uuid::Uuid;

use crate::domain::{
    model::{Entitlements, EntitlementsError, ModuleEffects, PlanLimitsLookup},
    port::{Clock, EntitlementsService, ModuleGrantRepository, PlanLimitsRepository},
};


/// Implementation of the EntitlementsService using a PlanLimitsRepository, a
/// ModuleGrantRepository and a Clock
#[derive(Debug, Clone)]
pub struct EntitlementsServiceImpl<PL, MG, C>
where
    PL: PlanLimitsRepository,
    MG: ModuleGrantRepository,
    C: Clock,
{
    /// The underlying plan limits repository
    plan_limits_repository: PL,
    /// The underlying module grant repository
    module_grant_repository: MG,
    /// The clock grant expiry is evaluated against
    clock: C,
}

impl<PL, MG, C> EntitlementsServiceImpl<PL, MG, C>
where
    PL: PlanLimitsRepository,
    MG: ModuleGrantRepository,
    C: Clock,
{
    /// Creates a new EntitlementsService
    pub fn new(plan_limits_repository: PL, module_grant_repository: MG, clock: C) -> Self {
        Self {
            plan_limits_repository,
            module_grant_repository,
            clock,
        }
    }
}

impl<PL, MG, C> EntitlementsService for EntitlementsServiceImpl<PL, MG, C>
where
    PL: PlanLimitsRepository,
    MG: ModuleGrantRepository,
    C: Clock,
{
    /// Resolves the effective entitlements for the profile.
    ///
    /// The two lookups are independent and issued concurrently; the fold over
    /// the grants is order independent since addition and logical OR commute.
    /// A grant whose effects payload does not parse contributes nothing and
    /// is reported, the remaining grants still apply.
    async fn resolve_entitlements(
        &self,
        profile_id: Uuid,
    ) -> Result<Entitlements, EntitlementsError> {
        let now = self.clock.now();

        let (lookup, grants) = tokio::try_join!(
            self.plan_limits_repository.plan_limits_for_profile(profile_id),
            self.module_grant_repository
                .active_grants_for_profile(profile_id, now),
        )?;

        let limits = match lookup {
            PlanLimitsLookup::Found(limits) => limits,
            PlanLimitsLookup::ProfileMissing => return Err(EntitlementsError::ProfileNotFound),
            PlanLimitsLookup::PlanMissing => return Err(EntitlementsError::PlanLimitsNotFound),
        };

        let mut entitlements = Entitlements::from(limits);
        for grant in grants {
            let effects = match serde_json::from_value::<ModuleEffects>(grant.effects) {
                Ok(effects) => effects,
                Err(error) => {
                    tracing::warn!(
                        module_code = %grant.module_code,
                        %profile_id,
                        error = ?error,
                        "skipping module grant with malformed effects payload"
                    );
                    continue;
                }
            };

            entitlements.max_links += i64::from(effects.extra_links);
            entitlements.max_photos += i64::from(effects.extra_photos);
            entitlements.max_faqs += i64::from(effects.extra_faqs);
            entitlements.can_use_vcard |= effects.unlock_vcard;
        }

        Ok(entitlements)
    }
}
