use entitlements::domain::model::Entitlements;
use model::{
    auth::{AccessTokenResponse, LoginRequest, RequestCodeRequest},
    faq::{CreateFaqRequest, Faq, PublicFaq, UpdateFaqRequest},
    link::{CreateLinkRequest, Link, PublicLink, ReorderLinksRequest, UpdateLinkRequest},
    module::{CreateModuleRequest, GrantModuleRequest, Module, ModuleGrant, UpdateModuleRequest},
    photo::{CreatePhotoRequest, CreatePhotoResponse, Photo, PublicPhoto},
    plan::{AssignPlanRequest, CreatePlanRequest, Plan, UpdatePlanRequest},
    product::{CreateProductRequest, Product, PublicProduct, UpdateProductRequest},
    profile::{CreateProfileRequest, Profile, PublicProfileResponse, UpdateProfileRequest},
    response::EmptyResponse,
    stats::{DailyViews, LinkClicks, ProfileStats},
};
use utoipa::OpenApi;

use crate::api::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        crate::api::health::health,
        // Auth
        crate::api::auth::request_code::request_code,
        crate::api::auth::login::login,
        // Public page
        crate::api::public::profile::get_public_profile,
        crate::api::public::vcard::get_vcard,
        crate::api::public::redirect::click_redirect,
        // Owner profile
        crate::api::admin::profile::get::get_profile,
        crate::api::admin::profile::update::update_profile,
        // Links
        crate::api::admin::links::list::list_links,
        crate::api::admin::links::create::create_link,
        crate::api::admin::links::update::update_link,
        crate::api::admin::links::delete::delete_link,
        crate::api::admin::links::reorder::reorder_links,
        // Photos
        crate::api::admin::photos::list::list_photos,
        crate::api::admin::photos::create::create_photo,
        crate::api::admin::photos::confirm::confirm_photo,
        crate::api::admin::photos::delete::delete_photo,
        // Products
        crate::api::admin::products::list::list_products,
        crate::api::admin::products::create::create_product,
        crate::api::admin::products::update::update_product,
        crate::api::admin::products::delete::delete_product,
        // Faqs
        crate::api::admin::faqs::list::list_faqs,
        crate::api::admin::faqs::create::create_faq,
        crate::api::admin::faqs::update::update_faq,
        crate::api::admin::faqs::delete::delete_faq,
        // Entitlements
        crate::api::admin::entitlements::get::get_entitlements,
        // Stats
        crate::api::admin::stats::get::get_stats,
        // Plans
        crate::api::superadmin::plans::list::list_plans,
        crate::api::superadmin::plans::create::create_plan,
        crate::api::superadmin::plans::update::update_plan,
        crate::api::superadmin::plans::deactivate::deactivate_plan,
        // Modules
        crate::api::superadmin::modules::list::list_modules,
        crate::api::superadmin::modules::create::create_module,
        crate::api::superadmin::modules::update::update_module,
        crate::api::superadmin::modules::deactivate::deactivate_module,
        // Profiles
        crate::api::superadmin::profiles::list::list_profiles,
        crate::api::superadmin::profiles::create::create_profile,
        crate::api::superadmin::profiles::assign_plan::assign_plan,
        crate::api::superadmin::profiles::list_grants::list_grants,
        crate::api::superadmin::profiles::grant_module::grant_module,
        crate::api::superadmin::profiles::revoke_module::revoke_module,
    ),
    components(
        schemas(
            HealthResponse,
            EmptyResponse,
            RequestCodeRequest,
            LoginRequest,
            AccessTokenResponse,
            Profile,
            CreateProfileRequest,
            UpdateProfileRequest,
            PublicProfileResponse,
            Link,
            CreateLinkRequest,
            UpdateLinkRequest,
            ReorderLinksRequest,
            PublicLink,
            Photo,
            CreatePhotoRequest,
            CreatePhotoResponse,
            PublicPhoto,
            Product,
            CreateProductRequest,
            UpdateProductRequest,
            PublicProduct,
            Faq,
            CreateFaqRequest,
            UpdateFaqRequest,
            PublicFaq,
            Plan,
            CreatePlanRequest,
            UpdatePlanRequest,
            AssignPlanRequest,
            Module,
            CreateModuleRequest,
            UpdateModuleRequest,
            GrantModuleRequest,
            ModuleGrant,
            Entitlements,
            DailyViews,
            LinkClicks,
            ProfileStats,
        )
    ),
    tags(
        (name = "biolink service", description = "Biolink Service")
    )
)]
pub struct ApiDoc;
