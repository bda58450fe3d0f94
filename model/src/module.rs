//! Models for feature modules and their grants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A feature module; its `effects` payload describes what the module adds on
/// top of a plan's base limits
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Module {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub effects: serde_json::Value,
    /// Deactivated modules stop contributing to resolved entitlements but
    /// existing grants are kept
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request body to create a module
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, derive_builder::Builder)]
#[builder(pattern = "owned")]
pub struct CreateModuleRequest {
    pub code: String,
    pub name: String,
    #[builder(default)]
    #[serde(default)]
    pub description: Option<String>,
    #[builder(default = "serde_json::json!({})")]
    #[serde(default = "default_effects")]
    pub effects: serde_json::Value,
}

fn default_effects() -> serde_json::Value {
    serde_json::json!({})
}

/// Request body to update a module; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateModuleRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub effects: Option<serde_json::Value>,
}

/// Request body to grant a module to a profile. Granting an already granted
/// module refreshes its expiry
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GrantModuleRequest {
    /// `None` grants the module forever
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// A module granted to a profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct ModuleGrant {
    pub profile_id: Uuid,
    pub module_code: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub granted_at: DateTime<Utc>,
}
