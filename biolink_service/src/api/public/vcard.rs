use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use entitlements::domain::port::EntitlementsService;

use crate::{
    api::{context::ApiContext, map_entitlements_error},
    constants::PUBLIC_PAGE_BASE_URL,
    vcard,
};

#[utoipa::path(
    get,
    path = "/p/{handle}/vcard",
    params(
        ("handle" = String, Path, description = "The profile handle")
    ),
    responses(
        (status = 200, description = "The profile contact card", body = String, content_type = "text/vcard"),
        (status = 404, description = "No published profile under this handle, or the vCard is not part of its entitlements", body = String)
    ),
    tag = "public"
)]
#[tracing::instrument(skip(context))]
pub async fn get_vcard(
    State(context): State<ApiContext>,
    Path(handle): Path<String>,
) -> Result<Response, Response> {
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

    // The card is served as missing rather than forbidden, the page does not
    // advertise locked features.
    if !entitlements.can_use_vcard {
        return Err((StatusCode::NOT_FOUND, "not found").into_response());
    }

    let profile_url = format!("{PUBLIC_PAGE_BASE_URL}/{}", profile.handle);
    let card = vcard::render(
        &profile.display_name,
        &profile.bio,
        &profile_url,
        profile.whatsapp_number.as_deref(),
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/vcard; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.vcf\"", profile.handle),
            ),
        ],
        card,
    )
        .into_response())
}
