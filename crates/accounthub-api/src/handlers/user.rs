//! Profile handlers.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};

use accounthub_entity::user::ProfileUpdate;

use crate::dto::request::ProfileFields;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::auth::{read_file, read_text};
use crate::handlers::validate;
use crate::state::AppState;
use crate::uploads::UploadKind;

/// GET /profile
pub async fn profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.engine.profile(auth.claims.sub).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /update-profile
///
/// Multipart with `name`, `mobile`, and an optional replacement `image`.
/// A replaced image's old file is removed after the update sticks.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let mut fields = ProfileFields::default();
    let mut new_image: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match name.as_str() {
            "name" => fields.name = read_text(field).await?,
            "mobile" => fields.mobile = read_text(field).await?,
            "image" => new_image = Some(read_file(field, UploadKind::Image).await?),
            _ => {}
        }
    }
    validate(&fields)?;

    let current = state.engine.profile(auth.claims.sub).await?;

    let mut image = None;
    if let Some((name, bytes)) = new_image {
        image = Some(state.uploads.save(UploadKind::Image, &name, bytes).await?);
    }

    let result = state
        .engine
        .update_profile(ProfileUpdate {
            id: auth.claims.sub,
            name: fields.name,
            mobile: fields.mobile,
            image: image.clone(),
        })
        .await;

    let updated = match result {
        Ok(user) => user,
        Err(e) => {
            if let Some(reference) = &image {
                state.uploads.delete(reference).await;
            }
            return Err(e.into());
        }
    };

    // The old image is orphaned once the new reference is stored.
    if image.is_some()
        && let Some(old) = current.image
    {
        state.uploads.delete(&old).await;
    }

    Ok(Json(ApiResponse::ok(updated.into())))
}
