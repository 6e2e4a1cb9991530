//! Auth handlers — register, login, refresh, logout.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::{HeaderName, StatusCode};
use axum::response::{AppendHeaders, IntoResponse};

use accounthub_auth::engine::NewRegistration;

use crate::dto::request::{LoginRequest, LogoutRequest, RegisterFields};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, TokenResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::validate;
use crate::state::AppState;
use crate::uploads::UploadKind;

/// Collected parts of the multipart registration request.
#[derive(Default)]
struct RegistrationUpload {
    fields: RegisterFields,
    image: Option<(String, Bytes)>,
    document: Option<(String, Bytes)>,
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    let upload = read_registration(multipart).await?;
    validate(&upload.fields)?;

    let mut image = None;
    if let Some((name, bytes)) = upload.image {
        image = Some(state.uploads.save(UploadKind::Image, &name, bytes).await?);
    }
    let mut document = None;
    if let Some((name, bytes)) = upload.document {
        document = Some(
            state
                .uploads
                .save(UploadKind::Document, &name, bytes)
                .await?,
        );
    }

    let result = state
        .engine
        .register(NewRegistration {
            name: upload.fields.name,
            email: upload.fields.email,
            mobile: upload.fields.mobile,
            password: upload.fields.password,
            image: image.clone(),
            document: document.clone(),
        })
        .await;

    let user = match result {
        Ok(user) => user,
        Err(e) => {
            // The account was not created; do not keep its uploads.
            if let Some(reference) = &image {
                state.uploads.delete(reference).await;
            }
            if let Some(reference) = &document {
                state.uploads.delete(reference).await;
            }
            return Err(e.into());
        }
    };

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    validate(&req)?;

    let result = state.engine.login(&req.email, &req.password).await?;
    Ok(Json(ApiResponse::ok(LoginResponse::new(
        result.user,
        result.tokens,
    ))))
}

/// POST /refresh-token
pub async fn refresh(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let tokens = state.engine.refresh(auth.claims.sub).await?;
    Ok(Json(ApiResponse::ok(tokens.into())))
}

/// POST /logout
///
/// Revokes the token from the request body if one was supplied, otherwise
/// the token that authenticated the request. Responds with a
/// `Clear-Site-Data` header so browsers drop cached credentials.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let body_token = serde_json::from_slice::<LogoutRequest>(&body)
        .ok()
        .and_then(|req| req.token);
    let token = body_token.unwrap_or(auth.token);

    state.engine.logout(&token).await?;

    let headers = AppendHeaders([(
        HeaderName::from_static("clear-site-data"),
        "\"cookies\", \"storage\"",
    )]);
    Ok((
        headers,
        Json(ApiResponse::ok(MessageResponse::new(
            "Logged out successfully",
        ))),
    ))
}

async fn read_registration(mut multipart: Multipart) -> Result<RegistrationUpload, ApiError> {
    let mut upload = RegistrationUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("Malformed multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            "name" => upload.fields.name = read_text(field).await?,
            "email" => upload.fields.email = read_text(field).await?,
            "mobile" => upload.fields.mobile = read_text(field).await?,
            "password" => upload.fields.password = read_text(field).await?,
            "image" => upload.image = Some(read_file(field, UploadKind::Image).await?),
            "document" => upload.document = Some(read_file(field, UploadKind::Document).await?),
            _ => {}
        }
    }

    Ok(upload)
}

pub(crate) async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::validation(format!("Unreadable form field: {e}")))
}

pub(crate) async fn read_file(
    field: axum::extract::multipart::Field<'_>,
    kind: UploadKind,
) -> Result<(String, Bytes), ApiError> {
    let content_type = field.content_type().unwrap_or("").to_owned();
    if !kind.accepts(&content_type) {
        let message = match kind {
            UploadKind::Image => "Only JPEG and PNG images are accepted",
            UploadKind::Document => "Only Word and PDF documents are accepted",
        };
        return Err(ApiError::validation(message));
    }

    let file_name = field.file_name().unwrap_or("upload").to_owned();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| ApiError::validation(format!("Unreadable upload: {e}")))?;

    Ok((file_name, bytes))
}
