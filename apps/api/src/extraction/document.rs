//! Document extractor — turns uploaded bytes into plain text.
//!
//! Plain text is decoded locally. PDFs go through `pdf-extract` first and fall
//! back to the AI gateway when that yields nothing. Word documents always use
//! the gateway. Error messages are written for end users and shown verbatim.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use axum::http::StatusCode;
use bytes::Bytes;
use tracing::{debug, error, info, warn};

use crate::errors::AppError;
use crate::extraction::prompts::{extraction_request, extraction_system};
use crate::llm_client::{ChatMessage, ContentPart, ImageUrl, LlmClient, LlmError};

const MIME_TEXT: &str = "text/plain";
const MIME_PDF: &str = "application/pdf";
const MIME_DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const MIME_DOC: &str = "application/msword";

pub const NO_TEXT_MESSAGE: &str = "No text content could be extracted from the document";

/// Supported document families, detected from the declared MIME type or the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    Word,
    Unknown,
}

impl DocumentKind {
    /// First match wins: text, then PDF, then Word.
    pub fn detect(mime_type: Option<&str>, file_name: &str) -> Self {
        let mime = mime_type.map(|m| m.trim().to_ascii_lowercase()).unwrap_or_default();
        let name = file_name.to_ascii_lowercase();

        if mime == MIME_TEXT || name.ends_with(".txt") {
            DocumentKind::PlainText
        } else if mime == MIME_PDF || name.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if mime == MIME_DOCX
            || mime == MIME_DOC
            || name.ends_with(".docx")
            || name.ends_with(".doc")
        {
            DocumentKind::Word
        } else {
            DocumentKind::Unknown
        }
    }

    /// Name used in the extraction prompt.
    fn label(&self) -> &'static str {
        match self {
            DocumentKind::PlainText => "text",
            DocumentKind::Pdf => "PDF",
            DocumentKind::Word => "Word document",
            DocumentKind::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub bytes: Bytes,
    pub file_name: String,
    pub mime_type: Option<String>,
}

impl DocumentUpload {
    pub fn kind(&self) -> DocumentKind {
        DocumentKind::detect(self.mime_type.as_deref(), &self.file_name)
    }
}

/// The document-to-text collaborator.
#[derive(Clone)]
pub struct DocumentExtractor {
    llm: LlmClient,
}

impl DocumentExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Extracts text from an upload. Never returns blank text.
    pub async fn extract(&self, upload: &DocumentUpload) -> Result<String, AppError> {
        let kind = upload.kind();
        info!(
            "Processing document: {}, type: {}",
            upload.file_name,
            upload.mime_type.as_deref().unwrap_or("unknown")
        );

        let text = match kind {
            DocumentKind::PlainText => String::from_utf8_lossy(&upload.bytes).into_owned(),
            DocumentKind::Pdf => match extract_pdf_locally(upload.bytes.clone()).await {
                Some(text) => text,
                None => self.extract_with_ai(upload, kind).await?,
            },
            DocumentKind::Word => self.extract_with_ai(upload, kind).await?,
            DocumentKind::Unknown => match std::str::from_utf8(&upload.bytes) {
                Ok(text) => text.to_string(),
                Err(_) => {
                    return Err(AppError::Extraction(format!(
                        "Unsupported file type: {}",
                        upload.mime_type.as_deref().unwrap_or("unknown")
                    )))
                }
            },
        };

        if text.trim().is_empty() {
            return Err(AppError::Extraction(NO_TEXT_MESSAGE.to_string()));
        }

        info!(
            "Successfully extracted {} characters from {}",
            text.chars().count(),
            upload.file_name
        );
        Ok(text)
    }

    async fn extract_with_ai(
        &self,
        upload: &DocumentUpload,
        kind: DocumentKind,
    ) -> Result<String, AppError> {
        if !self.llm.is_configured() {
            return Err(extraction_error(LlmError::NotConfigured));
        }

        let file_type = kind.label();
        info!("Using AI to extract text from {}: {}", file_type, upload.file_name);

        let messages = [
            ChatMessage::system(extraction_system(file_type)),
            ChatMessage::user_parts(vec![
                ContentPart::Text {
                    text: extraction_request(file_type, &upload.file_name),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: format!("data:{MIME_PDF};base64,{}", BASE64.encode(&upload.bytes)),
                    },
                },
            ]),
        ];

        let response = self
            .llm
            .call(&messages)
            .await
            .map_err(extraction_error)?;

        response
            .text()
            .map(|t| t.trim().to_string())
            .ok_or_else(|| extraction_error(LlmError::EmptyContent))
    }
}

/// Runs `pdf-extract` on a blocking thread. `None` when it fails or finds only whitespace.
async fn extract_pdf_locally(bytes: Bytes) -> Option<String> {
    let outcome = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
    })
    .await;

    match outcome {
        Ok(Ok(text)) if !text.trim().is_empty() => {
            debug!("pdf-extract recovered {} bytes of text", text.len());
            Some(text)
        }
        Ok(Ok(_)) => {
            debug!("pdf-extract found no text, falling back to AI extraction");
            None
        }
        Ok(Err(e)) => {
            warn!("pdf-extract failed, falling back to AI extraction: {e}");
            None
        }
        Err(e) => {
            warn!("pdf-extract task aborted, falling back to AI extraction: {e}");
            None
        }
    }
}

/// Maps gateway failures to the messages shown to the user.
fn extraction_error(err: LlmError) -> AppError {
    let (status, message) = match &err {
        LlmError::RateLimited => (
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Please try again in a moment.",
        ),
        LlmError::QuotaExceeded => (
            StatusCode::BAD_GATEWAY,
            "AI usage limit reached. Please add credits to continue.",
        ),
        LlmError::NotConfigured => (StatusCode::SERVICE_UNAVAILABLE, "AI service not configured"),
        LlmError::EmptyContent => (StatusCode::BAD_GATEWAY, "AI returned empty response"),
        _ => {
            error!("AI gateway error during extraction: {err}");
            (StatusCode::BAD_GATEWAY, "Failed to extract text from document")
        }
    };
    AppError::ExtractionService {
        status,
        message: message.to_string(),
    }
}
