use std::str::FromStr;

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entitlements::domain::port::EntitlementsService;
use media_store::UPLOAD_URL_TTL_SECONDS;
use model::{
    auth::OwnerContext,
    paths,
    photo::{CreatePhotoRequest, CreatePhotoResponse, ImageType},
};
use uuid::Uuid;

use crate::api::{context::ApiContext, map_entitlements_error};

#[utoipa::path(
    post,
    path = paths::ADMIN_PHOTOS,
    request_body = CreatePhotoRequest,
    responses(
        (status = 201, description = "The pending photo row and the presigned upload URL", body = CreatePhotoResponse),
        (status = 400, description = "Unsupported image type", body = String),
        (status = 401, description = "Unauthorized", body = String),
        (status = 403, description = "The photo quota of the profile's entitlements is used up", body = String)
    ),
    tag = "photos"
)]
#[tracing::instrument(skip(context, owner, request), fields(profile_id = %owner.profile_id))]
pub async fn create_photo(
    State(context): State<ApiContext>,
    owner: Extension<OwnerContext>,
    Json(request): Json<CreatePhotoRequest>,
) -> Result<(StatusCode, Json<CreatePhotoResponse>), Response> {
    let image_type = request
        .file_name
        .rsplit_once('.')
        .and_then(|(_, extension)| ImageType::from_str(extension).ok())
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "unsupported image type").into_response())?;

    let entitlements = context
        .entitlements
        .resolve_entitlements(owner.profile_id)
        .await
        .map_err(map_entitlements_error)?;

    // Pending uploads occupy a slot too, the count covers all rows.
    let count = context
        .db
        .count_photos(owner.profile_id)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to count photos");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    if count + 1 > entitlements.max_photos {
        return Err((StatusCode::FORBIDDEN, "QUOTA_EXCEEDED").into_response());
    }

    let photo_id = Uuid::new_v4();
    let object_key = format!(
        "profiles/{}/photos/{}.{}",
        owner.profile_id,
        photo_id,
        image_type.extension()
    );
    let content_type = request
        .content_type
        .as_deref()
        .unwrap_or(image_type.mime_type());

    let photo = context
        .db
        .create_photo(
            owner.profile_id,
            photo_id,
            &object_key,
            request.caption.as_deref().unwrap_or_default(),
        )
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to create photo");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    let upload_url = context
        .media
        .presigned_upload_url(&object_key, content_type, UPLOAD_URL_TTL_SECONDS)
        .await
        .map_err(|err| {
            tracing::error!(error=?err, "failed to presign upload url");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        })?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePhotoResponse { photo, upload_url }),
    ))
}
