//! Route path constants shared by the routers, the OpenAPI document and tests.

/// Health check router prefix
pub const HEALTH: &str = "/health";

/// Requests a login code by email
pub const AUTH_CODE: &str = "/auth/code";
/// Exchanges an emailed login code for an access token
pub const AUTH_LOGIN: &str = "/auth/login";

/// Admin profile endpoints
pub const ADMIN_PROFILE: &str = "/admin/profile";
/// Admin link endpoints
pub const ADMIN_LINKS: &str = "/admin/links";
/// Admin photo endpoints
pub const ADMIN_PHOTOS: &str = "/admin/photos";
/// Admin product endpoints
pub const ADMIN_PRODUCTS: &str = "/admin/products";
/// Admin FAQ endpoints
pub const ADMIN_FAQS: &str = "/admin/faqs";
/// Admin entitlements readout
pub const ADMIN_ENTITLEMENTS: &str = "/admin/entitlements";
/// Admin analytics report
pub const ADMIN_STATS: &str = "/admin/stats";

/// Super admin plan endpoints
pub const SUPERADMIN_PLANS: &str = "/superadmin/plans";
/// Super admin module endpoints
pub const SUPERADMIN_MODULES: &str = "/superadmin/modules";
/// Super admin profile endpoints
pub const SUPERADMIN_PROFILES: &str = "/superadmin/profiles";
