use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// JSON body extractor whose failures render as `400 BAD_REQUEST` problem details.
///
/// An empty body is read as `{}`, so payloads whose fields all default
/// (e.g. a quiz request from a fresh session) may be omitted.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or("").trim();
    mime.is_empty() || mime == "application/json" || mime.ends_with("+json")
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        // Extract content type before creating the async future to avoid borrow-across-await
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            if !is_json_content_type(&content_type) {
                return Err(AppError::bad_request(
                    ErrorCode::BadRequest,
                    "Expected an application/json body",
                ));
            }

            let mut body = BytesMut::new();
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(
                        trace_id = %trace_id,
                        error = %e,
                        "Failed to read request body chunk"
                    );
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                body.extend_from_slice(&chunk);
            }

            let raw: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
                b"{}"
            } else {
                &body[..]
            };

            let parsed = serde_json::from_slice::<T>(raw).map_err(|e| {
                debug!(
                    trace_id = %trace_id,
                    error = %Redacted(&e.to_string()),
                    content_type = %content_type,
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                AppError::bad_request(ErrorCode::BadRequest, classify_json_error(&e))
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Name of the field serde complained about, if the message carries one.
fn missing_field(error: &JsonError) -> Option<String> {
    let msg = error.to_string();
    let rest = msg.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

/// Classify serde_json::Error and return a sanitized error message
fn classify_json_error(error: &JsonError) -> String {
    match error.classify() {
        Category::Syntax => {
            let line = error.line();
            format!("Invalid JSON at line {line}")
        }
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => match missing_field(error) {
            Some(field) => format!("Invalid JSON: missing field '{field}'"),
            None => "Invalid JSON: wrong types for one or more fields".to_string(),
        },
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
