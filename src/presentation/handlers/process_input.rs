use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::{ProcessedInput, Submission, UploadedFile};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

const TEXT_FIELD: &str = "text";
const FILE_FIELD: &str = "file";

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
}

#[derive(Serialize)]
pub struct ProcessInputResponse {
    pub status: ResponseStatus,
    pub data: ProcessedInput,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_input_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse {
    let submission = match multipart {
        Ok(multipart) => match read_submission(multipart).await {
            Ok(submission) => submission,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {e}"),
                );
            }
        },
        Err(rejection) => {
            tracing::debug!(reason = %rejection, "Request carries no multipart form");
            Submission::default()
        }
    };

    if let Some(text) = submission.text.as_deref() {
        tracing::debug!(text = %sanitize_for_log(text), "Text received");
    }
    if let Some(file) = submission.file.as_ref() {
        tracing::debug!(filename = ?file.filename, bytes = file.data.len(), "File received");
    }

    match state.input_processor.process(&submission).await {
        Ok(data) => {
            tracing::info!(
                has_text = data.text.is_some(),
                has_file = data.file.is_some(),
                "Input processed"
            );
            (
                StatusCode::OK,
                Json(ProcessInputResponse {
                    status: ResponseStatus::Success,
                    data,
                    message: "Input processed successfully".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) if e.is_client_error() => {
            tracing::warn!(error = %e, "Input rejected");
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Input processing failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn read_submission(mut multipart: Multipart) -> Result<Submission, MultipartError> {
    let mut text = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some(TEXT_FIELD) => text = Some(field.text().await?),
            Some(FILE_FIELD) => {
                let filename = field.file_name().map(str::to_string);
                let data = field.bytes().await?;
                file = Some(UploadedFile::new(filename, data));
            }
            other => tracing::debug!(field = ?other, "Ignoring unknown multipart field"),
        }
    }

    Ok(Submission::new(text, file))
}

fn error_response(status: StatusCode, detail: String) -> Response {
    (status, Json(ErrorResponse { detail })).into_response()
}
