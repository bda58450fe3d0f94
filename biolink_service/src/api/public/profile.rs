use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entitlements::domain::port::EntitlementsService;
use media_store::VIEW_URL_TTL_SECONDS;
use model::{
    faq::PublicFaq,
    link::PublicLink,
    photo::PublicPhoto,
    product::PublicProduct,
    profile::PublicProfileResponse,
};

use crate::api::{context::ApiContext, map_entitlements_error};

#[utoipa::path(
    get,
    path = "/p/{handle}",
    params(
        ("handle" = String, Path, description = "The profile handle")
    ),
    responses(
        (status = 200, description = "The public profile page payload", body = PublicProfileResponse),
        (status = 404, description = "No published profile under this handle", body = String)
    ),
    tag = "public"
)]
#[tracing::instrument(skip(context))]
pub async fn get_public_profile(
    State(context): State<ApiContext>,
    Path(handle): Path<String>,
) -> Result<Json<PublicProfileResponse>, Response> {
    let handle = handle_validator::normalize_handle(&handle);

    let profile = context
        .db
        .get_profile_by_handle(&handle)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to fetch profile");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?
        .filter(|profile| profile.is_published)
        .ok_or_else(|| (StatusCode::NOT_FOUND, "not found").into_response())?;

    let entitlements = context
        .entitlements
        .resolve_entitlements(profile.id)
        .await
        .map_err(map_entitlements_error)?;

    // Rows beyond the effective limits stay stored but are not served.
    let mut links = context.db.list_links(profile.id).await.map_err(|err| {
        tracing::error!(error=?err, "failed to list links");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;
    links.truncate(entitlements.max_links.max(0) as usize);

    let mut photos = context
        .db
        .list_uploaded_photos(profile.id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to list photos");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;
    photos.truncate(entitlements.max_photos.max(0) as usize);

    let mut faqs = context.db.list_faqs(profile.id).await.map_err(|err| {
        tracing::error!(error=?err, "failed to list faqs");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;
    faqs.truncate(entitlements.max_faqs.max(0) as usize);

    let products = context.db.list_products(profile.id).await.map_err(|err| {
        tracing::error!(error=?err, "failed to list products");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    })?;

    let avatar_url = match profile.avatar_key.as_deref() {
        Some(key) => Some(view_url(&context, key).await?),
        None => None,
    };

    let mut public_photos = Vec::with_capacity(photos.len());
    for photo in photos {
        public_photos.push(PublicPhoto {
            url: view_url(&context, &photo.object_key).await?,
            caption: photo.caption,
        });
    }

    let mut public_products = Vec::with_capacity(products.len());
    for product in products {
        let image_url = match product.image_key.as_deref() {
            Some(key) => Some(view_url(&context, key).await?),
            None => None,
        };
        public_products.push(PublicProduct {
            id: product.id,
            title: product.title,
            description: product.description,
            price_cents: product.price_cents,
            currency: product.currency,
            url: product.url,
            image_url,
        });
    }

    // A failed counter write must not take the page down.
    if let Err(err) = context.db.record_profile_view(profile.id).await {
        tracing::warn!(error=?err, "failed to record profile view");
    }

    let whatsapp_link = profile.whatsapp_link();
    Ok(Json(PublicProfileResponse {
        handle: profile.handle,
        display_name: profile.display_name,
        bio: profile.bio,
        avatar_url,
        whatsapp_link,
        links: links.into_iter().map(PublicLink::from).collect(),
        photos: public_photos,
        products: public_products,
        faqs: faqs.into_iter().map(PublicFaq::from).collect(),
        entitlements,
    }))
}

async fn view_url(context: &ApiContext, key: &str) -> Result<String, Response> {
    context
        .media
        .presigned_view_url(key, VIEW_URL_TTL_SECONDS)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to presign view url");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })
}
