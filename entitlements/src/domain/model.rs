//! Contains the models for plan limits, module effects and entitlements

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;


/// The base limits a subscription plan provides to the profiles assigned to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanLimits {
    /// How many links the plan allows on a profile
    pub max_links: i32,
    /// How many gallery photos the plan allows on a profile
    pub max_photos: i32,
    /// How many FAQ entries the plan allows on a profile
    pub max_faqs: i32,
    /// Whether the plan exposes the vCard download
    pub can_use_vcard: bool,
}

/// One module grant that is active for a profile, carrying the raw effects
/// payload of the granted module
#[derive(Debug, Clone, PartialEq)]
pub struct GrantedModule {
    /// The code of the granted module
    pub module_code: String,
    /// The raw effects payload attached to the module definition
    pub effects: serde_json::Value,
    /// When the grant stops applying, if ever
    pub expires_at: Option<DateTime<Utc>>,
}

/// The parsed effects payload of a module definition.
///
/// Every field is optional in the payload; an absent field contributes
/// nothing. Unknown fields are tolerated so payloads written by newer module
/// definitions still resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleEffects {
    /// Additional links on top of the plan base
    #[serde(default)]
    pub extra_links: u32,
    /// Additional gallery photos on top of the plan base
    #[serde(default)]
    pub extra_photos: u32,
    /// Additional FAQ entries on top of the plan base
    #[serde(default)]
    pub extra_faqs: u32,
    /// Unlocks the vCard download regardless of the plan base
    #[serde(default, rename = "unlockVCard")]
    pub unlock_vcard: bool,
}

/// The effective capability set for a profile after merging its plan's base
/// limits with all module grants active at evaluation time.
///
/// Derived per request and embedded verbatim in response payloads; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Entitlements {
    /// Effective number of links the profile may publish
    pub max_links: i64,
    /// Effective number of gallery photos the profile may publish
    pub max_photos: i64,
    /// Effective number of FAQ entries the profile may publish
    pub max_faqs: i64,
    /// Whether the profile may expose the vCard download
    #[serde(rename = "canUseVCard")]
    pub can_use_vcard: bool,
}

impl From<PlanLimits> for Entitlements {
    fn from(limits: PlanLimits) -> Self {
        Self {
            max_links: i64::from(limits.max_links),
            max_photos: i64::from(limits.max_photos),
            max_faqs: i64::from(limits.max_faqs),
            can_use_vcard: limits.can_use_vcard,
        }
    }
}

/// Outcome of looking up the plan limits for a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanLimitsLookup {
    /// The profile exists and its plan carries limits
    Found(PlanLimits),
    /// No profile exists for the requested id
    ProfileMissing,
    /// The profile exists but no plan limits are reachable from it
    PlanMissing,
}

/// Errors that can occur when resolving entitlements for a profile.
#[derive(Debug, thiserror::Error)]
pub enum EntitlementsError {
    /// The profile does not exist
    #[error("The profile does not exist")]
    ProfileNotFound,
    /// The profile's plan has no limits configured
    #[error("The profile's plan has no limits configured")]
    PlanLimitsNotFound,
    /// An error occurred at the storage layer
    #[error("An error occurred at the storage layer {0}")]
    StorageLayerError(#[from] anyhow::Error),
}
