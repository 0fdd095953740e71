//! Axum route handlers for the Document API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::document::DocumentUpload;
use crate::state::AppState;

const FILE_REQUIRED_MESSAGE: &str = "File data and filename are required";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseDocumentRequest {
    pub file_base64: Option<String>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseDocumentResponse {
    pub success: bool,
    pub text: String,
}

/// POST /api/v1/documents/parse
///
/// Base64 upload: `{ fileBase64, fileName, mimeType }` → `{ success, text }`.
pub async fn handle_parse_document(
    State(state): State<AppState>,
    Json(request): Json<ParseDocumentRequest>,
) -> Result<Json<ParseDocumentResponse>, AppError> {
    let (encoded, file_name) = match (request.file_base64, request.file_name) {
        (Some(data), Some(name)) if !data.trim().is_empty() && !name.trim().is_empty() => {
            (data, name)
        }
        _ => return Err(AppError::Validation(FILE_REQUIRED_MESSAGE.to_string())),
    };

    let bytes = BASE64
        .decode(encoded.trim())
        .map_err(|e| AppError::Validation(format!("fileBase64 is not valid base64: {e}")))?;

    let upload = DocumentUpload {
        bytes: Bytes::from(bytes),
        file_name,
        mime_type: request.mime_type,
    };

    let text = state.extractor.extract(&upload).await?;
    Ok(Json(ParseDocumentResponse {
        success: true,
        text,
    }))
}

/// POST /api/v1/documents/upload
///
/// Multipart upload with a single `file` field. Same response as `/parse`.
pub async fn handle_upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseDocumentResponse>, AppError> {
    let mut upload: Option<DocumentUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let mime_type = field.content_type().map(String::from);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        upload = Some(DocumentUpload {
            bytes,
            file_name,
            mime_type,
        });
        break;
    }

    let upload = upload
        .filter(|u| !u.bytes.is_empty() && !u.file_name.trim().is_empty())
        .ok_or_else(|| AppError::Validation(FILE_REQUIRED_MESSAGE.to_string()))?;

    let text = state.extractor.extract(&upload).await?;
    Ok(Json(ParseDocumentResponse {
        success: true,
        text,
    }))
}
