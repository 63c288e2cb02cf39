use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::application::ports::{FileLoader, TextSplitter};
use crate::application::services::GuardError;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GuardRequest {
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GuardResponse {
    pub status: u8,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessingErrorResponse {
    pub message: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

/// Joins a caller-supplied path onto the source root. Absolute paths are
/// re-rooted; any `..` component makes the path invalid.
fn resolve_source_path(root: &Path, file_path: &str) -> Option<PathBuf> {
    let relative = Path::new(file_path.trim_start_matches(['/', '\\']));
    if relative
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
    {
        return None;
    }
    Some(root.join(relative))
}

#[tracing::instrument(skip(state, request))]
pub async fn guard_handler<F, T>(
    State(state): State<AppState<F, T>>,
    Json(request): Json<GuardRequest>,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    T: TextSplitter + ?Sized + 'static,
{
    let (file_path, file_name) = match (request.file_path, request.file_name) {
        (Some(path), Some(name)) if !path.trim().is_empty() && !name.trim().is_empty() => {
            (path, name)
        }
        _ => {
            tracing::warn!("Guard request without file path or name");
            return error_response(
                StatusCode::BAD_REQUEST,
                "File path/name is required".to_string(),
            );
        }
    };

    let source = match resolve_source_path(&state.settings.source.root, &file_path) {
        Some(path) => path,
        None => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid file path {}", file_path),
            );
        }
    };

    match tokio::fs::metadata(&source).await {
        Ok(metadata) if metadata.is_file() => {}
        _ => {
            tracing::warn!(path = %source.display(), "Submitted path is not a file");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid file path {}", file_path),
            );
        }
    }

    let working_copy = match state.working_area.copy_in(&source, &file_name).await {
        Ok(copy) => copy,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create working copy");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to copy file: {}", e),
            );
        }
    };

    // Dropping this future (client disconnect) cancels the screening.
    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    let timeout = Duration::from_secs(state.settings.classification.request_timeout_secs);
    let outcome = tokio::time::timeout(
        timeout,
        state
            .guard_service
            .evaluate(working_copy.path(), &file_name, &cancel),
    )
    .await;

    match outcome {
        Ok(Ok(decision)) => (
            StatusCode::OK,
            Json(GuardResponse {
                status: decision.status.code(),
                message: decision.message,
            }),
        )
            .into_response(),
        Ok(Err(e @ GuardError::Extraction(_))) => {
            tracing::warn!(error = %e, file_name = %file_name, "Extraction failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ProcessingErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
        Ok(Err(e @ GuardError::Cancelled)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
        Err(_) => {
            tracing::error!(timeout_secs = timeout.as_secs(), "Document screening timed out");
            error_response(
                StatusCode::GATEWAY_TIMEOUT,
                format!("Screening timed out after {}s", timeout.as_secs()),
            )
        }
    }
}
